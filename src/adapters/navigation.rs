use crate::core::{CourseId, CourseProvider, CourseRecord};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MY_COURSES_KEY: &str = "mycourses";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Root,
    System,
    Category,
    MyCategory,
    Course,
    Section,
    Activity,
    Resource,
    Custom,
    Setting,
    SiteAdmin,
    User,
    Container,
}

/// One node of a cached navigation tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationNode {
    pub key: String,
    pub node_type: NodeType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub shorttext: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default = "default_display")]
    pub display: bool,
    #[serde(default)]
    pub force_open: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub children: Vec<NavigationNode>,
}

fn default_display() -> bool {
    true
}

impl NavigationNode {
    pub fn get(&self, key: &str) -> Option<&NavigationNode> {
        self.children.iter().find(|child| child.key == key)
    }

    pub fn contains_active_node(&self) -> bool {
        self.is_active || self.children.iter().any(NavigationNode::contains_active_node)
    }

    /// Descendants of the given type, depth first, in document order.
    pub fn find_all_of_type(&self, node_type: NodeType) -> Vec<&NavigationNode> {
        let mut found = Vec::new();
        for child in &self.children {
            if child.node_type == node_type {
                found.push(child);
            }
            found.extend(child.find_all_of_type(node_type));
        }
        found
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationTree {
    pub root: NavigationNode,
}

impl NavigationTree {
    pub fn new(root: NavigationNode) -> Self {
        Self { root }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: NavigationNode = serde_json::from_str(content)?;
        Ok(Self::new(root))
    }

    /// The "my courses" branch, if the root is a usable site node.
    pub fn my_courses_branch(&self) -> Option<&NavigationNode> {
        let root = &self.root;
        if !root.display && !root.contains_active_node() {
            return None;
        }
        if root.node_type != NodeType::System || root.action.as_deref().unwrap_or("").is_empty() {
            return None;
        }
        root.get(MY_COURSES_KEY)
    }
}

impl CourseProvider for NavigationTree {
    fn course_records(&self) -> Result<Vec<CourseRecord>> {
        let Some(my) = self.my_courses_branch() else {
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        for node in my.find_all_of_type(NodeType::Course) {
            match node.key.parse::<CourseId>() {
                Ok(id) => records.push(CourseRecord {
                    id,
                    fullname: node.title.clone(),
                    shortname: node.shorttext.clone(),
                    url: node.action.clone().unwrap_or_default(),
                    hidden: node.hidden,
                }),
                Err(_) => {
                    tracing::warn!(key = %node.key, "skipping course node with non-numeric key");
                }
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &str = r#"{
        "key": "home",
        "node_type": "system",
        "action": "https://lms.example.edu/",
        "children": [
            {"key": "mycourses", "node_type": "root", "force_open": true, "children": [
                {"key": "sem1", "node_type": "my_category", "children": [
                    {"key": "12", "node_type": "course", "title": "Algebra", "shorttext": "MATH101",
                     "action": "https://lms.example.edu/course/view.php?id=12",
                     "children": [{"key": "99", "node_type": "course", "title": "Nested", "shorttext": "N1"}]}
                ]},
                {"key": "7", "node_type": "course", "title": "Biology", "shorttext": "BIO", "hidden": true}
            ]}
        ]
    }"#;

    #[test]
    fn test_course_records_from_tree() {
        let tree = NavigationTree::from_json_str(TREE).unwrap();

        let records = tree.course_records().unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![12, 99, 7]);
        assert_eq!(records[0].shortname, "MATH101");
        assert_eq!(records[0].url, "https://lms.example.edu/course/view.php?id=12");
        assert!(records[2].hidden);
        assert_eq!(records[2].url, "");
    }

    #[test]
    fn test_no_branch_without_action() {
        let mut tree = NavigationTree::from_json_str(TREE).unwrap();
        tree.root.action = None;
        assert!(tree.my_courses_branch().is_none());
        assert!(tree.course_records().unwrap().is_empty());
    }

    #[test]
    fn test_hidden_root_needs_active_node() {
        let mut tree = NavigationTree::from_json_str(TREE).unwrap();
        tree.root.display = false;
        assert!(tree.my_courses_branch().is_none());

        tree.root.children[0].children[1].is_active = true;
        assert!(tree.my_courses_branch().is_some());
    }

    #[test]
    fn test_branch_lookup_by_key() {
        let tree = NavigationTree::from_json_str(TREE).unwrap();
        let my = tree.my_courses_branch().unwrap();
        assert!(my.force_open);
        assert!(my.get("sem1").is_some());
        assert!(my.get("missing").is_none());
        assert_eq!(my.find_all_of_type(NodeType::MyCategory).len(), 1);
    }
}
