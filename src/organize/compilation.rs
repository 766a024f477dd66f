use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info};

use crate::library::MetadataRecord;

use super::prompt::Confirm;

const RULE: &str = "===================";

/// Indices of records sharing an identical album name.
/// Records without an album belong to no group.
pub fn group_by_album(records: &[MetadataRecord]) -> BTreeMap<&str, Vec<usize>> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, record) in records.iter().enumerate() {
        if let Some(album) = record.album.as_deref() {
            groups.entry(album).or_default().push(i);
        }
    }
    groups
}

/// More than one member, credited to more than one distinct artist.
pub fn is_candidate(records: &[MetadataRecord], members: &[usize]) -> bool {
    if members.len() < 2 {
        return false;
    }
    let artists: HashSet<Option<&str>> = members
        .iter()
        .map(|&i| records[i].artist.as_deref())
        .collect();
    artists.len() > 1
}

/// Candidate albums in album-name order.
pub fn candidates(records: &[MetadataRecord]) -> Vec<(String, Vec<usize>)> {
    group_by_album(records)
        .into_iter()
        .filter(|(_, members)| is_candidate(records, members))
        .map(|(album, members)| (album.to_string(), members))
        .collect()
}

/// Album block shown before asking about a candidate.
/// Members are ordered by track number, missing numbers first.
pub fn listing(album: &str, records: &[MetadataRecord], members: &[usize]) -> String {
    let mut sorted = members.to_vec();
    sorted.sort_by_key(|&i| records[i].track_number.unwrap_or(0));

    let mut out = format!("{RULE}\nAlbum: {album}\n");
    for i in sorted {
        out.push_str(&records[i].printable());
        out.push('\n');
    }
    out.push_str(RULE);
    out
}

/// Flag members of every accepted compilation album.
///
/// With `trust` set every candidate is accepted silently; otherwise the
/// operator is asked once per album. Returns how many albums were flagged.
pub fn detect_compilations(
    records: &mut [MetadataRecord],
    trust: bool,
    confirm: &mut dyn Confirm,
) -> usize {
    let mut flagged = 0;

    for (album, members) in candidates(records) {
        let accepted = if trust {
            true
        } else {
            let prompt = format!(
                "{}\nIs this a valid compilation album?",
                listing(&album, records, &members)
            );
            confirm.confirm(&prompt)
        };

        if !accepted {
            debug!(album = %album, "compilation declined");
            continue;
        }

        info!(album = %album, tracks = members.len(), "compilation album");
        for i in members {
            records[i].in_compilation = true;
        }
        flagged += 1;
    }

    flagged
}
