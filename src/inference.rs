//! Heuristic defaults derived from a repository's primary language, its
//! top-level file names and its latest commit message.
//!
//! Every rule list is first-match-wins, and every function falls back to a
//! fixed sentence so no input is ever left without text.

use std::collections::BTreeSet;

use crate::github::RepositoryMetadata;

pub type FileSet = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredDefaults {
    pub purpose: String,
    pub install_steps: String,
    pub usage_steps: String,
    pub dependencies: String,
}

pub fn infer(metadata: &RepositoryMetadata) -> InferredDefaults {
    let language = metadata.primary_language();
    let files = &metadata.top_level_files;

    InferredDefaults {
        purpose: infer_purpose(files, metadata.latest_commit_message()),
        install_steps: install_steps(language, files).to_string(),
        usage_steps: usage_steps(language, files).to_string(),
        dependencies: guess_dependencies(language, files).to_string(),
    }
}

pub fn infer_purpose(files: &FileSet, commit_message: &str) -> String {
    const RULES: [(&str, &str); 4] = [
        ("index.html", "build a slick web app with HTML/CSS"),
        ("main.py", "automate tasks with Python"),
        ("app.js", "create a Node.js backend or CLI tool"),
        ("Dockerfile", "deploy a containerized app"),
    ];

    if let Some((_, purpose)) = RULES.iter().find(|(file, _)| files.contains(*file)) {
        return purpose.to_string();
    }

    let words: Vec<&str> = commit_message.split_whitespace().take(3).collect();
    format!("streamline your workflow (based on commit: {})", words.join(" "))
}

pub fn install_steps(language: &str, files: &FileSet) -> &'static str {
    match language {
        "Python" => "pip install -r requirements.txt",
        "JavaScript" if files.contains("package.json") => "npm install",
        "Ruby" => "bundle install",
        _ => "Follow the setup instructions in the repo.",
    }
}

pub fn usage_steps(language: &str, files: &FileSet) -> &'static str {
    match language {
        "Python" if files.contains("main.py") => "python main.py",
        "JavaScript" if files.contains("index.js") => "node index.js",
        _ if files.contains("index.html") => "Open index.html in your browser.",
        _ => "Check the docs or source code to get started.",
    }
}

// The file set is unused today; manifests are referenced by language alone.
pub fn guess_dependencies(language: &str, _files: &FileSet) -> &'static str {
    match language {
        "Python" => "See requirements.txt (if present)",
        "JavaScript" => "Listed in package.json",
        _ => "None specified—add as needed!",
    }
}
