use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

use crate::core::{Disk, HanoiError, Rod, Tower, ROD_SEPARATOR, WIDE_DISK_TERMINATOR};

// `_321__` for three disks on the first of three rods. Once a size needs two digits every
// size is terminated instead: `_10.9.8._7._`.
impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = self
            .rods
            .iter()
            .flat_map(Rod::disks)
            .any(|disk| disk.size() >= 10);
        for rod in &self.rods {
            f.write_char(ROD_SEPARATOR)?;
            for disk in rod.disks() {
                write!(f, "{}", disk.size())?;
                if wide {
                    f.write_char(WIDE_DISK_TERMINATOR)?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Tower {
    type Err = HanoiError;

    fn from_str(label: &str) -> Result<Tower, HanoiError> {
        let malformed = |reason: String| HanoiError::MalformedLabel {
            label: label.to_string(),
            reason,
        };

        if label.is_empty() {
            return Tower::from_rods(Vec::new());
        }
        let Some(body) = label.strip_prefix(ROD_SEPARATOR) else {
            return Err(malformed(format!("expected a leading '{ROD_SEPARATOR}'")));
        };

        // one format for the whole label
        let wide = body.contains(WIDE_DISK_TERMINATOR);
        let mut rods = Vec::new();
        for group in body.split(ROD_SEPARATOR) {
            let sizes = parse_sizes(group, wide).map_err(&malformed)?;
            rods.push(Rod::try_new(sizes.into_iter().map(Disk::new).collect())?);
        }
        let tower = Tower::from_rods(rods)?;

        let canonical = tower.to_string();
        if canonical != label {
            return Err(malformed(format!("the canonical label is {canonical:?}")));
        }
        Ok(tower)
    }
}

fn parse_sizes(group: &str, wide: bool) -> Result<Vec<u32>, String> {
    let sizes = if wide {
        if group.is_empty() {
            return Ok(Vec::new());
        }
        let Some(terminated) = group.strip_suffix(WIDE_DISK_TERMINATOR) else {
            return Err(format!("rod {group:?} does not end with '{WIDE_DISK_TERMINATOR}'"));
        };
        terminated
            .split(WIDE_DISK_TERMINATOR)
            .map(|size| size.parse::<u32>().map_err(|err| format!("{size:?}: {err}")))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        group
            .chars()
            .map(|c| c.to_digit(10).ok_or_else(|| format!("unexpected character {c:?}")))
            .collect::<Result<Vec<_>, _>>()?
    };

    if sizes.contains(&0) {
        return Err("disk sizes start at 1".to_string());
    }
    Ok(sizes)
}
