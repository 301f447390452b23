//! Sample site documents and helpers to lay them out on disk.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::{Value, json};

/// Relative path of the translation table in a site checkout.
pub const TRANSLATIONS_PATH: &str = "assets/utils/translations.json";
/// Relative path of the projects file in a site checkout.
pub const PROJECTS_PATH: &str = "assets/data/projects.json";
/// Relative path of the publications file in a site checkout.
pub const PUBLICATIONS_PATH: &str = "assets/data/publications.json";

/// Translation table with matching English and Chinese catalogs.
#[must_use]
pub fn translations() -> Value {
    json!({
        "en": {
            "navbar": {
                "brand": "Ada Lovelace",
                "home": "Home",
                "about": "About",
                "projects": "Projects",
                "publications": "Publications",
                "contact": "Contact"
            },
            "profile": {
                "nationality": "Nationality",
                "nationalityValue": "British",
                "age": "Age",
                "ageValue": "36",
                "email": "Email",
                "emailValue": "ada@example.org",
                "phone": "Phone",
                "phoneValue": "+44 20 7946 0000",
                "location": "Location",
                "locationValue": "London, UK"
            },
            "hero": {
                "name": "Ada Lovelace",
                "title": "Analyst & Metaphysician",
                "bio": "Writes programs for engines that do not exist yet."
            },
            "about": { "heading": "About me" },
            "contact": { "namePlaceholder": "Your name" }
        },
        "zh": {
            "navbar": {
                "brand": "艾达·洛芙莱斯",
                "home": "首页",
                "about": "关于",
                "projects": "项目",
                "publications": "论文",
                "contact": "联系"
            },
            "profile": {
                "nationality": "国籍",
                "nationalityValue": "英国",
                "age": "年龄",
                "ageValue": "36",
                "email": "邮箱",
                "emailValue": "ada@example.org",
                "phone": "电话",
                "phoneValue": "+44 20 7946 0000",
                "location": "所在地",
                "locationValue": "英国伦敦"
            },
            "hero": {
                "name": "艾达·洛芙莱斯",
                "title": "分析师与形而上学家",
                "bio": "为尚未存在的机器编写程序。"
            },
            "about": { "heading": "关于我" },
            "contact": { "namePlaceholder": "您的姓名" }
        },
        "site": {
            "photo": "assets/images/profile/ada.jpg",
            "highlightAuthor": "A. Lovelace",
            "social": [
                { "label": "GitHub", "url": "https://github.com/ada", "icon": "fab fa-github" },
                { "label": "ResearchGate", "url": "https://www.researchgate.net/profile/ada" }
            ]
        }
    })
}

/// Projects file: one fully translated record, one English-only record and
/// one record with only a Chinese title.
#[must_use]
pub fn projects() -> Value {
    json!({
        "labels": {
            "en": {
                "title": "Projects",
                "viewCode": "View Code",
                "liveDemo": "Live Demo",
                "paper": "Paper",
                "featured": "Featured",
                "ongoing": "Ongoing",
                "completed": "Completed",
                "present": "Present",
                "role": "Role",
                "empty": "No projects yet."
            },
            "zh": {
                "title": "项目",
                "viewCode": "查看代码",
                "liveDemo": "在线演示",
                "paper": "论文",
                "featured": "精选",
                "ongoing": "进行中",
                "completed": "已完成",
                "present": "至今",
                "role": "角色",
                "empty": "暂无项目。"
            }
        },
        "projects": [
            {
                "id": "engine",
                "title": { "en": "Analytical Engine Notes", "zh": "分析机笔记" },
                "description": {
                    "en": "Annotated translation with the first published algorithm.",
                    "zh": "附有首个公开算法的注释译文。"
                },
                "role": { "en": "Author", "zh": "作者" },
                "startDate": "2023-05",
                "status": "ongoing",
                "featured": true,
                "tags": ["Rust", "WebAssembly"],
                "links": { "github": "https://github.com/ada/engine", "demo": "https://ada.example.org/engine" }
            },
            {
                "id": "loom",
                "title": { "en": "Jacquard Loom Study" },
                "description": { "en": "Punched cards as a control medium." },
                "startDate": "2021-01",
                "endDate": "2021-12",
                "status": "completed",
                "tags": ["History"],
                "links": { "paper": "https://ada.example.org/loom.pdf" }
            },
            {
                "id": "bernoulli",
                "title": { "zh": "伯努利数" },
                "startDate": "2020-07",
                "endDate": "2020-09",
                "status": "archived"
            }
        ]
    })
}

/// Publications file with a journal article and an English-only preprint.
#[must_use]
pub fn publications() -> Value {
    json!({
        "labels": {
            "en": {
                "title": "Publications",
                "showDetails": "Show details",
                "hideDetails": "Hide details",
                "abstract": "Abstract",
                "keywords": "Keywords",
                "doi": "DOI",
                "pdf": "PDF",
                "url": "Link",
                "journal": "Journal",
                "conference": "Conference",
                "preprint": "Preprint",
                "published": "Published",
                "accepted": "Accepted",
                "under-review": "Under review",
                "empty": "No publications yet."
            },
            "zh": {
                "title": "论文",
                "showDetails": "显示详情",
                "hideDetails": "隐藏详情",
                "abstract": "摘要",
                "keywords": "关键词",
                "doi": "DOI",
                "pdf": "PDF",
                "url": "链接",
                "journal": "期刊",
                "conference": "会议",
                "preprint": "预印本",
                "published": "已发表",
                "accepted": "已接收",
                "under-review": "审稿中",
                "empty": "暂无论文。"
            }
        },
        "publications": [
            {
                "id": "sketch",
                "title": {
                    "en": "Sketch of the Analytical Engine",
                    "zh": "分析机概略"
                },
                "authors": ["L. F. Menabrea", "A. Lovelace"],
                "venue": { "en": "Scientific Memoirs", "zh": "科学回忆录" },
                "date": "2023-05",
                "type": "journal",
                "status": "published",
                "abstract": {
                    "en": "Describes the engine and a method for Bernoulli numbers.",
                    "zh": "描述分析机及计算伯努利数的方法。"
                },
                "keywords": ["computation", "algorithms"],
                "links": { "doi": "https://doi.org/10.0000/sketch" }
            },
            {
                "id": "poetical-science",
                "title": { "en": "Poetical Science" },
                "authors": ["A. Lovelace"],
                "venue": "arXiv",
                "date": "2024-01",
                "type": "preprint",
                "status": "under-review",
                "abstract": { "en": "Imagination as a scientific faculty." },
                "links": { "pdf": "https://ada.example.org/poetical.pdf" }
            }
        ]
    })
}

/// Write the three fixture documents under `root` using the default site layout.
///
/// # Errors
/// Returns an I/O error when a directory or file cannot be written.
pub fn write_site(root: &Path) -> io::Result<()> {
    write_json(&root.join(TRANSLATIONS_PATH), &translations())?;
    write_json(&root.join(PROJECTS_PATH), &projects())?;
    write_json(&root.join(PUBLICATIONS_PATH), &publications())
}

fn write_json(path: &Path, value: &Value) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(path, body)
}
