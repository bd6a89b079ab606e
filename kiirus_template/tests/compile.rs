use insta::{Settings, assert_snapshot, glob};
use kiirus_template::{compile, config::PrintOptions, print_tree};
use std::{fs, path::Path};

#[test]
fn compile_snapshot() {
    glob!("compile/*.html", |path| {
        let input = fs::read_to_string(path).unwrap();
        let output = run_compile_test(path, &input);
        build_settings(path).bind(|| {
            let name = path.file_stem().unwrap().to_str().unwrap();
            assert_snapshot!(name, output);
        });
    });
}

fn run_compile_test(path: &Path, input: &str) -> String {
    let root = compile(input);
    let recompiled = compile(input);
    similar_asserts::assert_eq!(
        root,
        recompiled,
        "'{}' compiles differently on the second run",
        path.display()
    );

    print_tree(&root, &PrintOptions::default())
}

fn build_settings(path: &Path) -> Settings {
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path(path.parent().unwrap());
    settings.remove_snapshot_suffix();
    settings.set_prepend_module_to_snapshot(false);
    settings.remove_input_file();
    settings.set_omit_expression(true);
    settings.remove_info();
    settings
}
