//! Mount point resolution from datastore location strings.
//!
//! A datastore location looks like `scheme://authority/<path>`, where the
//! path is either a drive-letter path (`/C:/ClusterStorage/vol`) or a UNC
//! path introduced by two or more slashes (`///fileserver/share`). The two
//! forms are matched by separate patterns, drive letter first.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::Serialize;
use strum::Display;
use tracing::debug;

/// Splits off `scheme://authority` and keeps the path, including its leading slash.
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^/]*(?P<path>/.*)$")
        .expect("location pattern must compile")
});

static DRIVE_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?P<mount>[A-Za-z]:/.*)$").expect("drive letter pattern must compile")
});

/// The greedy leading `/*` leaves exactly two slashes for the capture. A
/// share segment after the UNC host is required.
static UNC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/*(?P<mount>//[^/]+/.*)$").expect("UNC pattern must compile")
});

/// Which grammar alternative a mount point matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MountPointKind {
    /// `C:/...`
    DriveLetter,
    /// `//server/share/...`
    Unc,
}

/// A resolved mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    kind: MountPointKind,
    path: String,
}

impl MountPoint {
    pub fn kind(&self) -> MountPointKind {
        self.kind
    }

    /// Percent-decoded path with forward slashes.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path in the provider-native form, with backslash separators.
    pub fn native_path(&self) -> String {
        self.path.replace('/', "\\")
    }
}

/// Extracts the raw mount point text from a location string.
///
/// The capture is returned as written: still percent-encoded and with
/// forward slashes.
pub fn capture_mount_point(location: &str) -> Option<(MountPointKind, &str)> {
    let path = LOCATION_RE.captures(location)?.name("path")?.as_str();

    if let Some(mount) = DRIVE_LETTER_RE
        .captures(path)
        .and_then(|caps| caps.name("mount"))
    {
        return Some((MountPointKind::DriveLetter, mount.as_str()));
    }

    UNC_RE
        .captures(path)
        .and_then(|caps| caps.name("mount"))
        .map(|mount| (MountPointKind::Unc, mount.as_str()))
}

/// Resolves a datastore location string into a mount point.
///
/// Returns `None` when the location matches neither the drive-letter nor
/// the UNC form; some datastore types simply have no mount point.
pub fn resolve_mount_point(location: &str) -> Option<MountPoint> {
    let Some((kind, raw)) = capture_mount_point(location) else {
        debug!("no mount point in datastore location {:?}", location);
        return None;
    };

    let path = percent_decode_str(raw).decode_utf8_lossy().into_owned();
    debug!("resolved {} mount point {:?} from {:?}", kind, path, location);

    Some(MountPoint { kind, path })
}
