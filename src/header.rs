use crate::error::HeaderError;
use crate::include_matcher;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const BANNER: &str = r#"
/* Copyright 2007 United States Government as represented by the
 * Administrator of the National Aeronautics and Space
 * Administration. No copyright is claimed in the United States under
 * Title 17, U.S. Code.  All Other Rights Reserved.
 *
 * The refine platform is licensed under the Apache License, Version
 * 2.0 (the "License"); you may not use this file except in compliance
 * with the License. You may obtain a copy of the License at
 * http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
 * implied. See the License for the specific language governing
 * permissions and limitations under the License.
 */

"#;

/// Lines before the first `#include`, and where that include sits.
#[derive(Debug, PartialEq, Eq)]
pub struct Scan<'a> {
    pub prefix: &'a [&'a [u8]],
    pub include_at: Option<usize>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Rewritten,
    Empty,
}

/// Splits `content` into lines, each keeping its own `\n`.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    content.split_inclusive(|b| *b == b'\n').collect()
}

pub fn scan<'a>(lines: &'a [&'a [u8]]) -> Scan<'a> {
    let include_at = lines
        .iter()
        .position(|line| include_matcher::contains_include(line));
    let prefix = match include_at {
        Some(i) => &lines[..i],
        None => lines,
    };
    Scan { prefix, include_at }
}

/// First line kept after the banner. Without an include only the last line
/// survives; an empty file has nothing to keep.
pub fn retained_start(scan: &Scan, line_count: usize) -> Option<usize> {
    scan.include_at.or_else(|| line_count.checked_sub(1))
}

fn push_line(buf: &mut Vec<u8>, line: &[u8]) {
    buf.extend_from_slice(line);
    if !line.ends_with(b"\n") {
        buf.push(b'\n');
    }
}

pub fn render(lines: &[&[u8]], start: usize) -> Vec<u8> {
    let mut out = BANNER.as_bytes().to_vec();
    for line in &lines[start..] {
        push_line(&mut out, line);
    }
    out
}

/// Echoes the lines ahead of the first include to `echo`, then rewrites
/// `path` as banner + the include line onward.
pub fn inject(path: &Path, echo: &mut impl Write) -> Result<Outcome, HeaderError> {
    let content = fs::read(path).map_err(|err| HeaderError::read(path, err))?;
    let lines = split_lines(&content);
    let scan = scan(&lines);

    let Some(start) = retained_start(&scan, lines.len()) else {
        return Ok(Outcome::Empty);
    };

    let mut echoed = Vec::new();
    for line in scan.prefix {
        push_line(&mut echoed, line);
    }
    echo.write_all(&echoed)
        .and_then(|_| echo.flush())
        .map_err(|err| HeaderError::write("<stdout>", err))?;

    write_atomically(path, &render(&lines, start))?;

    Ok(Outcome::Rewritten)
}

/// Replaces `path` with `data` through a sibling temp file and a rename.
/// Symlinks are followed so the file they point to is the one rewritten;
/// a file with several hard links is rewritten in place to keep them joined.
pub fn write_atomically(path: &Path, data: &[u8]) -> Result<(), HeaderError> {
    let target = fs::canonicalize(path).map_err(|err| HeaderError::write(path, err))?;

    // Fail on a read-only target before anything touches the directory.
    let original = OpenOptions::new()
        .write(true)
        .open(&target)
        .map_err(|err| HeaderError::write(&target, err))?;
    let metadata = original
        .metadata()
        .map_err(|err| HeaderError::write(&target, err))?;
    drop(original);

    if has_other_links(&metadata) {
        return write_in_place(&target, data);
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(|err| HeaderError::write(&target, err))?;

    let mut writer = BufWriter::new(tmp.as_file());
    writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .map_err(|err| HeaderError::write(&target, err))?;
    drop(writer);

    tmp.as_file()
        .sync_all()
        .and_then(|_| fs::set_permissions(tmp.path(), metadata.permissions()))
        .map_err(|err| HeaderError::write(&target, err))?;

    tmp.persist(&target).map_err(|source| HeaderError::Persist {
        path: target.clone(),
        source,
    })?;
    Ok(())
}

#[cfg(unix)]
fn has_other_links(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    metadata.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_metadata: &fs::Metadata) -> bool {
    false
}

fn write_in_place(target: &Path, data: &[u8]) -> Result<(), HeaderError> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(target)
        .map_err(|err| HeaderError::write(target, err))?;
    let mut writer = BufWriter::new(&file);
    writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .map_err(|err| HeaderError::write(target, err))?;
    drop(writer);
    file.sync_all().map_err(|err| HeaderError::write(target, err))
}
