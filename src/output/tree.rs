use termtree::Tree;

use crate::group::GroupEntry;

/// Renders groups as `state -> module -> type.name`, one leaf per group.
///
/// Relies on `groups` being sorted by module, as `group_rows` returns them.
pub fn render_group_tree(root: &str, groups: &[GroupEntry]) -> String {
    let mut tree = Tree::new(root.to_string());
    let mut current: Option<Tree<String>> = None;
    let mut current_module = "";

    for group in groups {
        if current.is_none() || current_module != group.module {
            if let Some(done) = current.take() {
                tree.push(done);
            }
            current = Some(Tree::new(group.module.clone()));
            current_module = &group.module;
        }
        if let Some(module) = current.as_mut() {
            module.push(Tree::new(format!(
                "{}.{} ({}) x{}",
                group.resource_type, group.resource_name, group.provider, group.instance_count
            )));
        }
    }
    if let Some(done) = current {
        tree.push(done);
    }

    tree.to_string()
}
