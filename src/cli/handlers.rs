use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use log::debug;

use crate::{
    core::{config::Config, error::Error, grid::Grid},
    render::convert_grid,
};

/// Read a whole input; `-` means stdin.
pub fn read_input(path: &Path) -> Result<Vec<u8>, Error> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|e| Error::file_access(path, e))?;
        Ok(buf)
    } else {
        fs::read(path).map_err(|e| Error::file_access(path, e))
    }
}

/// Convert each file in turn into `out`. Stops at the first failure, so
/// later paths are never opened.
pub fn convert_files<W: Write>(
    paths: &[impl AsRef<Path>],
    config: &Config,
    mut out: W,
) -> Result<(), Error> {
    for path in paths {
        let path = path.as_ref();
        let data = read_input(path)?;

        let mut grid = Grid::from_bytes(&data);
        let stats = convert_grid(&mut grid, config);
        debug!(
            "{}: {} bytes, {}x{} grid, {} segments, {} junctions",
            path.display(),
            data.len(),
            grid.width(),
            grid.height(),
            stats.segments,
            stats.junctions
        );

        write!(out, "{grid}").map_err(Error::Output)?;
        out.flush().map_err(Error::Output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;

    fn fixture(text: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(text.as_bytes()).unwrap();
        f
    }

    #[test]
    fn files_are_concatenated_without_separators() {
        let a = fixture("+-+\n");
        let b = fixture("*-*");
        let mut out = Vec::new();
        convert_files(&[a.path(), b.path()], &Config::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "╶─╴\n╶─╴");
    }

    #[test]
    fn first_failure_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let good = fixture("|");

        let mut out = Vec::new();
        let err = convert_files(
            &[good.path(), missing.as_path(), good.path()],
            &Config::default(),
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(&err, Error::FileAccess { path, .. } if *path == missing));
        assert!(err.to_string().starts_with(&missing.display().to_string()));
        assert_eq!(String::from_utf8(out).unwrap(), "│");
    }

    /// Accepts nothing; counts how often it was asked.
    struct ClosedPipe(usize);

    impl io::Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            self.0 += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_stops_the_run() {
        let good = fixture("+-+");
        let dir = tempfile::tempdir().unwrap();
        // would be a read failure if the run went on past the first file
        let missing = dir.path().join("after.txt");

        let mut sink = ClosedPipe(0);
        let err = convert_files(
            &[good.path(), missing.as_path()],
            &Config::default(),
            &mut sink,
        )
        .unwrap_err();

        assert!(
            matches!(&err, Error::Output(e) if e.kind() == io::ErrorKind::BrokenPipe),
            "{err:?}"
        );
        assert_eq!(err.to_string(), "write error: closed");
        assert_eq!(sink.0, 1);
    }

    #[test]
    fn directory_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(dir.path()).unwrap_err();
        assert!(matches!(err, Error::FileAccess { .. }));
    }

    #[test]
    fn raw_bytes_survive_the_trip() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"caf\xC3\xA9 -\xFE-").unwrap();
        let mut out = Vec::new();
        convert_files(&[f.path()], &Config::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "café ─\u{FFFD}─");
    }
}
