//! Read-only virtual file tree holding the generator's templates and sources.
//!
//! Files are mounted under `/templates` and `/source`. The compiled-in copies
//! and directories read from disk go through the same [`AssetTree::insert`].
//! Compiled-in files never carry a build-time modification time, so the
//! binary is reproducible; `EmbedOptions` only matters for disk roots.

pub mod args;
pub mod errors;

use args::AssetArgs;
use errors::AssetError;
use include_dir::{Dir, DirEntry, include_dir};
use log::{debug, info};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

static TEMPLATES_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");
static SOURCE_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/source");

pub const TEMPLATES_MOUNT: &str = "/templates";
pub const SOURCE_MOUNT: &str = "/source";

/// Modification time reported by every asset while normalization is on.
pub const SENTINEL_MODTIME: SystemTime = SystemTime::UNIX_EPOCH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedOptions {
    pub normalize_modtime: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            normalize_modtime: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Asset {
    contents: Cow<'static, [u8]>,
    modified: SystemTime,
}

impl Asset {
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

/// Anything the generation pipeline can open files from by virtual path.
pub trait AssetSource {
    fn open(&self, path: &str) -> Result<&Asset, AssetError>;
}

#[derive(Debug, Clone, Default)]
pub struct AssetTree {
    files: BTreeMap<String, Asset>,
    options: EmbedOptions,
}

impl AssetTree {
    pub fn new(options: EmbedOptions) -> Self {
        Self {
            files: BTreeMap::new(),
            options,
        }
    }

    /// Tree built from the copies of `templates/` and `source/` baked into the binary.
    pub fn embedded(options: EmbedOptions) -> Self {
        let mut tree = Self::new(options);
        tree.mount_embedded(&TEMPLATES_DIR, TEMPLATES_MOUNT);
        tree.mount_embedded(&SOURCE_DIR, SOURCE_MOUNT);
        tree
    }

    /// Tree built from `<root>/templates` and `<root>/source` on disk.
    pub fn from_disk(root: &Path, options: EmbedOptions) -> Result<Self, AssetError> {
        let mut tree = Self::new(options);
        tree.mount_dir(&root.join("templates"), TEMPLATES_MOUNT)?;
        tree.mount_dir(&root.join("source"), SOURCE_MOUNT)?;
        Ok(tree)
    }

    pub fn mount_dir(&mut self, root: &Path, at: &str) -> Result<(), AssetError> {
        if !root.is_dir() {
            return Err(AssetError::MissingDirectory(root.display().to_string()));
        }

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry
                .map_err(|e| AssetError::WalkFailed(format!("{}: {}", root.display(), e)))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path
                .strip_prefix(root)
                .map_err(|e| AssetError::WalkFailed(format!("{}: {}", path.display(), e)))?;
            let contents = std::fs::read(path)
                .map_err(|e| AssetError::ReadFailed(format!("{}: {}", path.display(), e)))?;
            let modified = entry
                .metadata()
                .map_err(|e| AssetError::ReadFailed(format!("{}: {}", path.display(), e)))?
                .modified()
                .map_err(|e| AssetError::ReadFailed(format!("{}: {}", path.display(), e)))?;

            let virtual_path = join_virtual(at, relative);
            debug!("mounted {} at {}", path.display(), virtual_path);
            self.insert(&virtual_path, contents, modified);
        }

        Ok(())
    }

    fn mount_embedded(&mut self, dir: &Dir<'static>, at: &str) {
        for entry in dir.entries() {
            match entry {
                DirEntry::Dir(sub) => self.mount_embedded(sub, at),
                // Compiled-in files carry no build-time mtime.
                DirEntry::File(file) => {
                    self.insert(
                        &join_virtual(at, file.path()),
                        file.contents(),
                        SENTINEL_MODTIME,
                    );
                }
            }
        }
    }

    pub fn insert(
        &mut self,
        path: &str,
        contents: impl Into<Cow<'static, [u8]>>,
        modified: SystemTime,
    ) {
        let modified = if self.options.normalize_modtime {
            SENTINEL_MODTIME
        } else {
            modified
        };
        self.files.insert(
            normalize_path(path).into_owned(),
            Asset {
                contents: contents.into(),
                modified,
            },
        );
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Asset)> {
        self.files.iter().map(|(path, asset)| (path.as_str(), asset))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn options(&self) -> EmbedOptions {
        self.options
    }
}

impl AssetSource for AssetTree {
    fn open(&self, path: &str) -> Result<&Asset, AssetError> {
        self.files
            .get(normalize_path(path).as_ref())
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}

pub fn load_assets(args: &AssetArgs) -> Result<AssetTree, AssetError> {
    let options = EmbedOptions {
        normalize_modtime: !args.keep_modtime,
    };

    let tree = match &args.assets_root {
        Some(root) => AssetTree::from_disk(Path::new(root), options)?,
        None => AssetTree::embedded(options),
    };

    info!(
        "Embedded {} assets from {}",
        tree.len(),
        args.assets_root.as_deref().unwrap_or("the binary")
    );
    Ok(tree)
}

fn join_virtual(mount: &str, relative: &Path) -> String {
    let tail = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/{}", mount.trim_end_matches('/'), tail)
}

fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}
