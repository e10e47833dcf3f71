#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use flaggen::args::Args;
use flaggen::assets::args::AssetArgs;
use flaggen::assets::{AssetTree, EmbedOptions};
use flaggen::output::args::OutputArgs;
use flaggen::records::args::RecordArgs;

pub const INT_RECORD: &str = r#"[{"name":"Int","type":"int","value":true,"dest":true,"doctail":"an int flag","context_default":"0","context_type":"int","parser":"strconv.Atoi","parser_cast":"","valueString":"","takes_file":false}]"#;

pub const FUNC_PER_RECORD: &str = "package {{ package_name }}\n{% for flag in flag_types %}\n// {{ flag.name }} is {{ flag.doctail }}\nfunc {{ flag.name }}(v {{ flag.type }}) {{ flag.context_type }} { return {{ flag.context_default }} }\n{% endfor %}";

pub fn build_args(out: &Path) -> Args {
    Args {
        assets: AssetArgs::default(),
        records: RecordArgs::default(),
        output: OutputArgs {
            out: out.to_string_lossy().into_owned(),
            quiet: true,
            ..OutputArgs::default()
        },
    }
}

/// In-memory tree with the given source document and both package templates.
pub fn scenario_tree(source: &str) -> AssetTree {
    let mut tree = AssetTree::new(EmbedOptions::default());
    tree.insert(
        "/source/flag-types.json",
        source.as_bytes().to_vec(),
        SystemTime::now(),
    );
    tree.insert(
        "/templates/cli_flags_generated.gotpl",
        FUNC_PER_RECORD.as_bytes().to_vec(),
        SystemTime::now(),
    );
    tree.insert(
        "/templates/altsrc_flags_generated.gotpl",
        FUNC_PER_RECORD.as_bytes().to_vec(),
        SystemTime::now(),
    );
    tree
}

pub fn cli_output(out: &Path) -> std::path::PathBuf {
    out.join("flag_generated.go")
}

pub fn altsrc_output(out: &Path) -> std::path::PathBuf {
    out.join("altsrc").join("flag_generated.go")
}

pub fn read_outputs(out: &Path) -> (Vec<u8>, Vec<u8>) {
    (
        fs::read(cli_output(out)).expect("cli output exists"),
        fs::read(altsrc_output(out)).expect("altsrc output exists"),
    )
}

/// Copies the crate's own templates/ and source/ under `root`.
pub fn copy_repo_assets(root: &Path) {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    for dir in ["templates", "source"] {
        fs::create_dir_all(root.join(dir)).unwrap();
        for entry in fs::read_dir(manifest.join(dir)).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), root.join(dir).join(entry.file_name())).unwrap();
        }
    }
}
