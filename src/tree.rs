use crate::{
    report::Record,
    tool::{ROOT_NAME, join_path},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Children of a directory, in first-seen order
pub type Directory = IndexMap<String, Entry>;

/// Intermediate node built while assembling records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Leaf { size: u64, language: Option<String> },
    Directory(Directory),
}

impl Entry {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Entry::Leaf { .. })
    }
}

/// Knobs for turning the assembled tree into output nodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Emit zero-size files as `{name, size: 0}` leaves instead of empty directories.
    pub keep_empty_files: bool,
}

/// Output node, serialized as `{name, size?, codelang?, children?}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codelang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>, size: u64, codelang: Option<String>) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
            codelang,
            children: None,
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            size: None,
            codelang: None,
            children: Some(children),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.size.is_some() && self.children.is_none()
    }

    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children().iter().map(TreeNode::leaf_count).sum()
    }

    pub fn total_size(&self) -> u64 {
        self.size.unwrap_or(0) + self.children().iter().map(TreeNode::total_size).sum::<u64>()
    }
}

/// Records nested by path segment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Directory,
}

impl Tree {
    pub fn new() -> Tree {
        Tree::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Tree {
        let mut tree = Tree::new();
        for record in records {
            tree.insert(record);
        }
        tree
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of leaves currently in the tree
    pub fn len(&self) -> usize {
        fn count(dir: &Directory) -> usize {
            dir.values()
                .map(|entry| match entry {
                    Entry::Leaf { .. } => 1,
                    Entry::Directory(children) => count(children),
                })
                .sum()
        }
        count(&self.root)
    }

    pub fn insert(&mut self, record: Record) {
        let Record {
            path,
            size,
            language,
        } = record;
        self.add_path(&path, size, language);
    }

    fn add_path(&mut self, path: &[String], size: u64, language: Option<String>) {
        let Some((name, dirs)) = path.split_last() else {
            return;
        };
        let mut current = &mut self.root;
        for (i, part) in dirs.iter().enumerate() {
            let entry = current
                .entry(part.clone())
                .or_insert_with(|| Entry::Directory(Directory::new()));
            if entry.is_leaf() {
                warn!(
                    file = %join_path(&path[..=i]),
                    "file is also used as a directory, keeping the directory"
                );
                *entry = Entry::Directory(Directory::new());
            }
            let Entry::Directory(children) = entry else {
                return;
            };
            current = children;
        }

        match current.get_mut(name) {
            Some(Entry::Directory(_)) => {
                warn!(
                    file = %join_path(path),
                    "file is also used as a directory, dropping the file"
                );
            }
            Some(leaf) => {
                debug!(file = %join_path(path), "duplicate file, overwriting");
                *leaf = Entry::Leaf { size, language };
            }
            None => {
                current.insert(name.clone(), Entry::Leaf { size, language });
            }
        }
    }

    /// Reshape into the output tree, consuming the assembled entries.
    pub fn into_node(self, options: &ConvertOptions) -> TreeNode {
        TreeNode::directory(ROOT_NAME, reshape(self.root, options))
    }
}

fn reshape(dir: Directory, options: &ConvertOptions) -> Vec<TreeNode> {
    dir.into_iter()
        .map(|(name, entry)| match entry {
            Entry::Leaf { size: 0, .. } if !options.keep_empty_files => {
                TreeNode::directory(name, vec![])
            }
            Entry::Leaf { size, language } => TreeNode::leaf(name, size, language),
            Entry::Directory(children) => TreeNode::directory(name, reshape(children, options)),
        })
        .collect()
}
