//! Seed data for the virtual filesystem.
//!
//! The default tree is the embedded portfolio content. A custom tree can be
//! loaded from a JSON file (`--seed`); the format is the serde representation
//! of [`SeedNode`]:
//!
//! ```json
//! [{ "type": "folder", "name": "portfolio", "children": [
//!    { "type": "file", "name": "README.md", "ext": "md", "content": "..." }
//! ]}]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Serializable node description consumed by [`crate::vfs::Vfs::from_seed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SeedNode {
    Folder {
        name: String,
        #[serde(default)]
        children: Vec<SeedNode>,
    },
    File {
        name: String,
        #[serde(default)]
        ext: String,
        #[serde(default)]
        content: String,
    },
}

impl SeedNode {
    pub fn name(&self) -> &str {
        match self {
            SeedNode::Folder { name, .. } | SeedNode::File { name, .. } => name,
        }
    }
}

/// Load a seed tree from a JSON file.
pub fn load_seed_file(path: &Path) -> Result<Vec<SeedNode>> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::Seed(format!("{}: {e}", path.display())))
}

fn file(name: &str, ext: &str, content: &str) -> SeedNode {
    SeedNode::File {
        name: name.to_string(),
        ext: ext.to_string(),
        content: content.to_string(),
    }
}

fn folder(name: &str, children: Vec<SeedNode>) -> SeedNode {
    SeedNode::Folder {
        name: name.to_string(),
        children,
    }
}

/// The built-in portfolio tree.
pub fn default_seed() -> Vec<SeedNode> {
    vec![
        folder(
            "portfolio",
            vec![
                file(
                    "README.md",
                    "md",
                    concat!(
                        "/**\n",
                        " * @author Alex Narayanan\n",
                        " * @role Senior Software Engineer\n",
                        " * @experience 8+ Years\n",
                        " */\n",
                        "public class Portfolio implements FullStackDeveloper {\n",
                        "    private final String motto = \"I build reliable web apps and automations.\";\n",
                        "    private final String[] interests = {\"Automation\", \"Open Source\"};\n",
                        "\n",
                        "    public String getCurrentStatus() {\n",
                        "        return \"Open to impactful opportunities\";\n",
                        "    }\n",
                        "}",
                    ),
                ),
                file(
                    "about.java",
                    "java",
                    concat!(
                        "@Profile(name=\"Alex Narayanan\")\n",
                        "class About {\n",
                        "  String email = \"alex@example.dev\";\n",
                        "  String location = \"Chennai, India\";\n",
                        "}",
                    ),
                ),
                file(
                    "contact.json",
                    "json",
                    r#"{"email":"alex@example.dev","github":"alexnarayanan","linkedin":"/in/alex-narayanan"}"#,
                ),
            ],
        ),
        folder(
            "experience",
            vec![
                file(
                    "paypal.java",
                    "java",
                    concat!(
                        "@Company(\"PayPal\")\n",
                        "@Duration(\"May 2021 - Present\")\n",
                        "public class SrSoftwareEngineer {\n",
                        "  private final List<String> achievements = Arrays.asList(\n",
                        "    \"Closed webhook gap for 10% of merchants\",\n",
                        "    \"Near real-time analytics pipeline\",\n",
                        "    \"Spam below 2%; API throughput +1.5x\"\n",
                        "  );\n",
                        "}",
                    ),
                ),
                file(
                    "assetpulse.java",
                    "java",
                    concat!(
                        "@Company(\"Assetpulse\")\n",
                        "@Duration(\"Oct 2019 - May 2021\")\n",
                        "public class SoftwareEngineer {\n",
                        "  private final List<String> achievements = Arrays.asList(\n",
                        "    \"BLE over RFID, -33% hardware cost\",\n",
                        "    \"Live triangulation over WebSocket\"\n",
                        "  );\n",
                        "}",
                    ),
                ),
                file(
                    "timeline.json",
                    "json",
                    r#"[{"company":"PayPal","from":"2021-05"},{"company":"Assetpulse","from":"2019-10","to":"2021-05"}]"#,
                ),
            ],
        ),
        folder(
            "projects",
            vec![
                file(
                    "paypal-webhooks.java",
                    "java",
                    concat!(
                        "public class PayPalWebhooks {\n",
                        "  String description = \"Closed product gap with analytics\";\n",
                        "  String[] techStack = {\"Java\", \"Spring\", \"Kafka\"};\n",
                        "}",
                    ),
                ),
                file(
                    "port-advancer.java",
                    "java",
                    concat!(
                        "public class PortAdvancer {\n",
                        "  String description = \"Self-serve port forwarding in restricted networks\";\n",
                        "  String[] techStack = {\"Node.js\", \"Networking\"};\n",
                        "}",
                    ),
                ),
                file(
                    "opensource.md",
                    "md",
                    "- vue-embed-gist: contribution (~270 weekly downloads)\n- utils-commons: Java utilities",
                ),
            ],
        ),
        folder(
            "skills",
            vec![
                file(
                    "backend.xml",
                    "xml",
                    concat!(
                        "<skills category=\"backend\">",
                        "<language proficiency=\"expert\">Java</language>",
                        "<framework proficiency=\"advanced\">Spring Boot</framework>",
                        "</skills>",
                    ),
                ),
                file(
                    "frontend.jsx",
                    "jsx",
                    "const FrontendSkills = () => { const skills = { frameworks: ['React','Vue'] }; return skills }",
                ),
                file(
                    "devops.yaml",
                    "yaml",
                    "devops:\n  tools: [Jenkins, GitHub Actions, Docker]\n  cloud: [GCP, AWS]\n",
                ),
            ],
        ),
        folder(
            "education",
            vec![file(
                "mca.md",
                "md",
                "- University of Madras (2016-2019)\n- 6.48 CGPA\n- Cloud-based secure storage (double encryption)",
            )],
        ),
    ]
}
