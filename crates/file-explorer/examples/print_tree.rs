//! CLI example that loads a seed tree and displays its full hierarchy
//!
//! Usage:
//!   cargo run --example print_tree [seed.json]
//!
//! If no seed file is provided, uses the built-in sample tree.

use file_explorer::preview::DEFAULT_IMAGE_EXTENSIONS;
use file_explorer::prelude::*;
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed = match args.get(1) {
        Some(path) => {
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Error reading seed file: {}", e);
                    std::process::exit(1);
                }
            };
            match serde_json::from_str::<SeedNode>(&text) {
                Ok(seed) => seed,
                Err(e) => {
                    eprintln!("Error parsing seed file: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => SeedNode::default(),
    };

    let tree = match TreeStore::from_seed(seed) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error building tree: {}", e);
            std::process::exit(1);
        }
    };

    println!("Tree Structure:");
    println!("═══════════════════════════════");
    println!();

    for node in tree.walk(TraversalOrder::PreOrder) {
        let indent = "  ".repeat(tree.depth(node.id()));

        let icon = match node.kind() {
            NodeKind::Folder => "📁",
            NodeKind::File => "📄",
        };

        match node.children() {
            Some(children) => println!(
                "{}{} {} ({} items) {}",
                indent,
                icon,
                node.name(),
                children.len(),
                node.id()
            ),
            None => {
                let content = ContentType::classify(node.name(), DEFAULT_IMAGE_EXTENSIONS);
                println!("{}{} {} [{}] {}", indent, icon, node.name(), content, node.id());
            }
        }
    }

    println!();
    println!("═══════════════════════════════");
    println!("Summary:");
    println!("  Total items: {}", tree.node_count());
    println!("  Folders: {}", tree.folders().len());
    println!("  Files: {}", tree.files().len());
}
