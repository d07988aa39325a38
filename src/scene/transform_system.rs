//! Transform system.
//!
//! Propagates world matrices through the node hierarchy, decoupled from
//! `Scene` so it only borrows the node arena and the camera pool. Cameras
//! attached to updated nodes get their view matrices refreshed in the same
//! pass.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::camera::Camera;
use crate::scene::node::Node;
use crate::scene::{CameraKey, NodeKey};

/// Updates world matrices for every node reachable from `roots`.
///
/// Uses an explicit stack instead of recursion so deeply nested scenes
/// cannot overflow the call stack. A node's world matrix is recomputed only
/// when its own local matrix changed or an ancestor's did.
pub fn update_hierarchy(
    nodes: &mut SlotMap<NodeKey, Node>,
    cameras: &mut SlotMap<CameraKey, Camera>,
    roots: &[NodeKey],
) {
    // (node, parent world matrix, parent changed)
    let mut stack: Vec<(NodeKey, Affine3A, bool)> = Vec::with_capacity(64);

    for &root in roots.iter().rev() {
        stack.push((root, Affine3A::IDENTITY, false));
    }

    while let Some((key, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(key) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let world_needs_update = local_changed || parent_changed;

        if world_needs_update {
            let new_world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(new_world);

            if let Some(camera_key) = node.camera
                && let Some(camera) = cameras.get_mut(camera_key)
            {
                camera.update_view_projection(&new_world);
            }
        }

        let current_world = node.transform.world_matrix;
        // Push children in reverse to preserve declaration order
        for i in (0..node.children.len()).rev() {
            let child = node.children[i];
            stack.push((child, current_world, world_needs_update));
        }
    }
}

/// Updates the subtree rooted at `root`, forcing world-matrix recomputation.
/// Used after reparenting a node, where the dirty flags alone cannot tell
/// that the parent chain changed.
pub fn update_subtree(
    nodes: &mut SlotMap<NodeKey, Node>,
    cameras: &mut SlotMap<CameraKey, Camera>,
    root: NodeKey,
) {
    let parent_world = match nodes.get(root) {
        Some(node) => node
            .parent
            .and_then(|p| nodes.get(p))
            .map_or(Affine3A::IDENTITY, |p| p.transform.world_matrix),
        None => return,
    };

    let mut stack: Vec<(NodeKey, Affine3A)> = vec![(root, parent_world)];

    while let Some((key, parent_world)) = stack.pop() {
        let Some(node) = nodes.get_mut(key) else {
            continue;
        };

        node.transform.update_local_matrix();
        let new_world = parent_world * *node.transform.local_matrix();
        node.transform.set_world_matrix(new_world);

        if let Some(camera_key) = node.camera
            && let Some(camera) = cameras.get_mut(camera_key)
        {
            camera.update_view_projection(&new_world);
        }

        for i in (0..node.children.len()).rev() {
            let child = node.children[i];
            stack.push((child, new_world));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_hierarchy_update() {
        let mut nodes: SlotMap<NodeKey, Node> = SlotMap::with_key();
        let mut cameras: SlotMap<CameraKey, Camera> = SlotMap::with_key();

        let mut parent = Node::new();
        parent.transform.position = Vec3::new(1.0, 0.0, 0.0);
        let parent_key = nodes.insert(parent);

        let mut child = Node::new();
        child.transform.position = Vec3::new(0.0, 1.0, 0.0);
        child.parent = Some(parent_key);
        let child_key = nodes.insert(child);
        nodes.get_mut(parent_key).unwrap().children.push(child_key);

        let roots = vec![parent_key];
        update_hierarchy(&mut nodes, &mut cameras, &roots);

        let child_world = nodes.get(child_key).unwrap().transform.world_matrix.translation;
        assert!((child_world.x - 1.0).abs() < 1e-5);
        assert!((child_world.y - 1.0).abs() < 1e-5);
    }
}
