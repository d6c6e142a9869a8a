//! Built-in product category tree.

use tree_select::{Tree, TreeNode};

/// The sample taxonomy both demo fields pick from.
pub fn product_categories() -> Tree {
    Tree::new(vec![
        TreeNode::new("electronics", "Electronics").with_children([
            TreeNode::new("computers", "Computers").with_children([
                TreeNode::new("laptop", "Laptops"),
                TreeNode::new("desktop", "Desktops"),
                TreeNode::new("tablet", "Tablets"),
            ]),
            TreeNode::new("phones", "Phones").with_children([
                TreeNode::new("smartphone", "Smartphones"),
                TreeNode::new("feature-phone", "Feature Phones"),
            ]),
        ]),
        TreeNode::new("clothing", "Clothing").with_children([
            TreeNode::new("mens", "Men's Clothing").with_children([
                TreeNode::new("mens-shirts", "Shirts"),
                TreeNode::new("mens-pants", "Pants"),
            ]),
            TreeNode::new("womens", "Women's Clothing").with_children([
                TreeNode::new("womens-dresses", "Dresses"),
                TreeNode::new("womens-tops", "Tops"),
            ]),
        ]),
        TreeNode::new("books", "Books").with_children([
            TreeNode::new("fiction", "Fiction"),
            TreeNode::new("non-fiction", "Non-Fiction"),
            TreeNode::new("educational", "Educational"),
        ]),
    ])
}
