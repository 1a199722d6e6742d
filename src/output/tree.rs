//! Directory tree rendering
//!
//! Entries are sorted by name at every level, directories and files mixed.
//! Top-level entries carry no branch glyph; their children are indented one
//! column step and drawn with `├── ` / `└── `.

use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct TreeNode {
    /// `None` marks a file
    children: BTreeMap<String, Option<TreeNode>>,
}

impl TreeNode {
    fn insert(&mut self, path: &str) {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        let mut current = self;

        for (idx, part) in parts.iter().enumerate() {
            let slot = current.children.entry(part.to_string()).or_insert(None);
            if idx == parts.len() - 1 {
                break;
            }
            current = slot.get_or_insert_with(TreeNode::default);
        }
    }
}

/// Render the paths as a tree, one entry per line
pub fn render_tree<'a>(paths: impl IntoIterator<Item = &'a str>) -> String {
    let mut root = TreeNode::default();
    for path in paths {
        root.insert(path);
    }

    let mut output = String::new();
    render_node(&root, "", true, &mut output);
    output
}

fn render_node(node: &TreeNode, prefix: &str, is_root: bool, output: &mut String) {
    let count = node.children.len();

    for (idx, (name, child)) in node.children.iter().enumerate() {
        let is_last = idx + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };

        output.push_str(prefix);
        if !is_root {
            output.push_str(connector);
        }
        output.push_str(name);
        if child.is_some() {
            output.push('/');
        }
        output.push('\n');

        if let Some(dir) = child {
            let next_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            render_node(dir, &next_prefix, false, output);
        }
    }
}
