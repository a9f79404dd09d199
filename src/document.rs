use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::book::Book;
use crate::xml::{NodeId, XmlTree};

/// Leading bytes of a gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// An open GnuCash data file: the XML tree, where it came from, and the book
/// built from it.
///
/// The tree is shared with the entity views, so mutations made through them
/// (scheduled-transaction date setters) are picked up by [`Document::save`].
#[derive(Debug)]
pub struct Document {
    tree: Arc<RwLock<XmlTree>>,
    path: PathBuf,
    compressed: bool,
    book: Book,
}

/// Open a GnuCash XML data file, gzip-compressed or plain.
///
/// The container format is sniffed from the gzip magic bytes, so a genuine
/// I/O failure is never mistaken for "not compressed". A sniffed gzip stream
/// that fails to decompress is a fatal load error.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let raw = fs::read(path).with_context(|| format!("unable to read `{}'", path.display()))?;

    let (content, compressed) = if raw.starts_with(&GZIP_MAGIC) {
        let mut buf = Vec::new();
        GzDecoder::new(raw.as_slice())
            .read_to_end(&mut buf)
            .with_context(|| format!("unable to decompress `{}'", path.display()))?;
        (buf, true)
    } else {
        (raw, false)
    };
    log::debug!(
        "read `{}' ({}compressed, {} bytes of XML)",
        path.display(),
        if compressed { "" } else { "un" },
        content.len()
    );

    let content =
        String::from_utf8(content).context("GnuCash document is not valid UTF-8")?;
    let tree = XmlTree::parse(&content)?;
    let book_node = locate_book(&tree)?;

    let tree = Arc::new(RwLock::new(tree));
    let book = Book::build(&tree, book_node)?;

    Ok(Document {
        tree,
        path: path.to_path_buf(),
        compressed,
        book,
    })
}

/// Find the single `/gnc-v2/gnc:book` element.
fn locate_book(tree: &XmlTree) -> Result<NodeId> {
    let books = tree
        .root_element()
        .filter(|&root| tree.element(root).map_or(false, |el| el.name() == "gnc-v2"))
        .map(|root| tree.find_children(root, "gnc:book"))
        .unwrap_or_default();
    if books.len() != 1 {
        bail!("Expected to find one gnc:book entry");
    }
    Ok(books[0])
}

impl Document {
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the source file was gzip-compressed.
    pub fn compressed(&self) -> bool {
        self.compressed
    }

    /// Write back to the original path in the original format. For an
    /// unmodified document this reproduces the loaded content byte for byte.
    pub fn save(&self) -> Result<()> {
        self.write_to(&self.path, self.compressed)
    }

    /// Write to `path`, keeping the original compression mode.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_to(path.as_ref(), self.compressed)
    }

    /// Write to `path` with an explicit compression mode.
    pub fn save_as<P: AsRef<Path>>(&self, path: P, compressed: bool) -> Result<()> {
        self.write_to(path.as_ref(), compressed)
    }

    fn write_to(&self, path: &Path, compressed: bool) -> Result<()> {
        let xml = self.tree.read().unwrap().to_bytes()?;
        let output = if compressed {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&xml)?;
            encoder.finish()?
        } else {
            xml
        };

        // Stage next to the target and rename into place, so an interrupted
        // write never truncates an existing file.
        let staged = staging_path(path);
        fs::write(&staged, &output)
            .with_context(|| format!("unable to write `{}'", staged.display()))?;
        if let Err(err) = fs::rename(&staged, path) {
            let _ = fs::remove_file(&staged);
            return Err(err)
                .with_context(|| format!("unable to replace `{}'", path.display()));
        }

        log::info!(
            "saved `{}' ({} bytes{})",
            path.display(),
            output.len(),
            if compressed { ", gzip" } else { "" }
        );
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "gnucash".into());
    name.push(".tmp");
    path.with_file_name(name)
}
