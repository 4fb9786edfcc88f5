/// A folder in a scaffold tree: its own files plus nested folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Folder {
    pub name: &'static str,
    pub files: &'static [&'static str],
    pub folders: &'static [Folder],
}

impl Folder {
    /// Number of files in this folder and all nested folders.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.folders.iter().map(Folder::file_count).sum::<usize>()
    }
}

/// Layout of the web project created in the working directory.
pub const PROJECT_TREE: &[Folder] = &[Folder {
    name: "angelsuccess-cybersecurity",
    files: &[
        "app.py",
        "requirements.txt",
        "runtime.txt",
        "Procfile",
        "railway.json",
        ".env.example",
        "DEPLOYMENT_GUIDE.md",
        "test_deployment.py",
        "DEPLOYMENT_CHECKLIST.md",
        ".gitignore",
    ],
    folders: &[Folder {
        name: "templates",
        files: &[
            "index.html",
            "auth.html",
            "dashboard.html",
            "network_monitor.html",
            "ai_analysis.html",
            "threat_intelligence.html",
            "optimization_center.html",
            "system_settings.html",
        ],
        folders: &[],
    }],
}];
