//! The fixed probe list for the deployed platform.

/// Pages that must render, in check order.
pub const PAGE_CHECKS: [(&str, &str); 9] = [
    ("/", "Landing Page"),
    ("/auth", "Authentication Page"),
    ("/dashboard", "Dashboard Page"),
    ("/network-monitor", "Network Monitor Page"),
    ("/ai-analysis", "AI Analysis Page"),
    ("/threat-intelligence", "Threat Intelligence Page"),
    ("/optimization-center", "Optimization Center Page"),
    ("/system-settings", "System Settings Page"),
    ("/free-access", "Free Access Page"),
];

/// APIs that must answer 200 with a JSON body, in check order.
pub const API_CHECKS: [(&str, &str); 2] = [
    ("/api/system-status", "System Status API"),
    ("/api/realtime-data", "Real-time Data API"),
];

pub const REALTIME_PATH: &str = "/api/realtime-data";

/// Top-level keys a complete real-time payload carries.
pub const REQUIRED_REALTIME_KEYS: [&str; 4] =
    ["ai_confidence", "system_health", "threat_feed", "charts"];

pub const LOGIN_PATH: &str = "/api/auth/login";

/// Pages + APIs + the real-time check + the authentication check.
pub const TOTAL_CHECKS: usize = PAGE_CHECKS.len() + API_CHECKS.len() + 2;
