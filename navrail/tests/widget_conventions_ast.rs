use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const WIDGET_FILES: [&str; 4] = ["mod.rs", "event.rs", "reducer.rs", "view.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                    declared_modules.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: module declaration '{}' must be pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let mut fs_modules = BTreeSet::new();
    let entries = fs::read_dir(&widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", widgets_dir.display())
    });
    for entry in entries {
        let path = entry.expect("dir entry should be readable").path();
        if path.is_dir() {
            let name = path
                .file_name()
                .unwrap_or_else(|| panic!("missing name for {}", path.display()))
                .to_string_lossy()
                .to_string();
            fs_modules.insert(name);
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(dir: &Path, violations: &mut Vec<String>) {
    let prefix = snake_to_pascal_case(
        &dir.file_name()
            .unwrap_or_else(|| panic!("missing name for {}", dir.display()))
            .to_string_lossy(),
    );

    for file_name in WIDGET_FILES {
        let path = dir.join(file_name);
        if !path.is_file() {
            violations.push(format!("{}: missing {file_name}", dir.display()));
            continue;
        }
        validate_side_effects(&path, violations);
        validate_imports(&path, violations);
    }

    let widget = parse(&dir.join("mod.rs"));
    let widget_struct = format!("{prefix}Widget");
    if !widget.items.iter().any(|item| {
        matches!(item, Item::Struct(item_struct) if item_struct.ident == widget_struct)
    }) {
        violations.push(format!(
            "{}: expected a {widget_struct} struct",
            dir.display()
        ));
    }

    let events = parse(&dir.join("event.rs"));
    for suffix in ["Intent", "Effect"] {
        let expected = format!("{prefix}{suffix}");
        let found = events
            .items
            .iter()
            .filter(|item| {
                matches!(item, Item::Enum(item_enum) if item_enum.ident.to_string().ends_with(suffix))
            })
            .count();
        let named = events.items.iter().any(|item| {
            matches!(item, Item::Enum(item_enum) if item_enum.ident == expected)
        });
        if found != 1 || !named {
            violations.push(format!(
                "{}: expected exactly one {expected} enum",
                dir.display()
            ));
        }
    }

    let view = parse(&dir.join("view.rs"));
    let view_count = view
        .items
        .iter()
        .filter(|item| {
            matches!(item, Item::Fn(item_fn) if item_fn.sig.ident == "view" && is_pub_crate(&item_fn.vis))
        })
        .count();
    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            dir.display()
        ));
    }
}

fn validate_side_effects(path: &Path, violations: &mut Vec<String>) {
    let source = read(path);
    let production = source.split("#[cfg(test)]").next().unwrap_or_default();

    for forbidden in [
        "log::",
        "std::fs::",
        "std::io::",
        "tokio::",
        "Task::",
        "iced::Task",
        "crate::app::",
        "crate::routers::",
    ] {
        if production.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                path.display()
            ));
        }
    }

    let is_view = path.file_name().is_some_and(|name| name == "view.rs");
    if !is_view && production.contains("Instant::now") {
        violations.push(format!(
            "{}: runtime time must come from the reducer context",
            path.display()
        ));
    }
}

fn validate_imports(path: &Path, violations: &mut Vec<String>) {
    let file = parse(path);
    for item in &file.items {
        if let Item::Use(item_use) = item
            && use_tree_has_glob(&item_use.tree)
        {
            violations.push(format!(
                "{}: wildcard use/import is forbidden",
                path.display()
            ));
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path))
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
