pub mod args;
pub mod errors;

use crate::render::Package;
use crc::{CRC_32_ISO_HDLC, Crc, Digest};
use errors::OutputError;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const GENERATED_FILE: &str = "flag_generated.go";

static CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

pub fn output_path(out_dir: &Path, package: Package) -> PathBuf {
    match package {
        Package::Cli => out_dir.join(GENERATED_FILE),
        Package::Altsrc => out_dir.join(package.name()).join(GENERATED_FILE),
    }
}

/// Writer that tracks the size and CRC-32 of everything passed through it.
pub struct DigestWriter<W: Write> {
    inner: W,
    digest: Digest<'static, u32>,
    written: usize,
}

impl<W: Write> DigestWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            digest: CRC32.digest(),
            written: 0,
        }
    }

    pub fn finish(self) -> (W, usize, u32) {
        (self.inner, self.written, self.digest.finalize())
    }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.digest.update(&buf[..n]);
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
    pub crc: u32,
}

/// Creates (or truncates) the output file, creating missing parent directories.
pub fn create_output(path: &Path) -> Result<DigestWriter<BufWriter<File>>, OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| OutputError::CreateFailed(format!("{}: {}", parent.display(), e)))?;
    }

    let file = File::create(path)
        .map_err(|e| OutputError::CreateFailed(format!("{}: {}", path.display(), e)))?;
    Ok(DigestWriter::new(BufWriter::new(file)))
}

pub fn finish_output(
    path: &Path,
    writer: DigestWriter<BufWriter<File>>,
) -> Result<WrittenFile, OutputError> {
    let (mut inner, bytes, crc) = writer.finish();
    inner
        .flush()
        .map_err(|e| OutputError::WriteFailed(format!("{}: {}", path.display(), e)))?;

    Ok(WrittenFile {
        path: path.to_path_buf(),
        bytes,
        crc,
    })
}
