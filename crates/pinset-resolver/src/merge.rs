//! Priority-ordered merging of manifests.
//!
//! Manifests are layered lowest priority first. A later pin may replace an
//! earlier version only when it is marked `# override`; any other version
//! disagreement is a [`Problem::CrossGroupConflict`].

use std::collections::HashMap;

use pinset_core::{Entry, Group, Manifest};

use crate::problem::{Problem, ProblemReport};

struct MergedGroup {
    name: String,
    entries: Vec<Entry>,
}

impl MergedGroup {
    fn from_group(group: &Group) -> Self {
        Self {
            name: group.name().to_string(),
            entries: group.entries().to_vec(),
        }
    }
}

/// First occurrence of each package across the layers merged so far.
struct PriorPin {
    group: String,
    version: String,
}

/// Merge `manifests`, lowest priority first.
///
/// `merge(&[])` is the empty manifest and `merge(&[m])` is `m`. Conflicts
/// between a layer and the layers below it are all collected; conflicts
/// inside one layer are left for [`crate::validate`] to report.
pub fn merge(manifests: &[Manifest]) -> Result<Manifest, ProblemReport> {
    let Some((base, layers)) = manifests.split_first() else {
        return Ok(Manifest::default());
    };

    let mut groups: Vec<MergedGroup> = base.groups().iter().map(MergedGroup::from_group).collect();
    let mut problems = Vec::new();

    for (depth, layer) in layers.iter().enumerate() {
        tracing::debug!("merging layer {} ({} pins)", depth + 1, layer.pin_count());

        let prior_lens: Vec<usize> = groups.iter().map(|g| g.entries.len()).collect();
        let mut prior = index_prior(&groups);

        for group in layer.groups() {
            let gi = match groups
                .iter()
                .position(|g| g.name.to_lowercase() == group.name().to_lowercase())
            {
                Some(existing) => existing,
                None => {
                    groups.push(MergedGroup {
                        name: group.name().to_string(),
                        entries: Vec::new(),
                    });
                    groups.len() - 1
                }
            };

            for entry in group.entries() {
                match entry {
                    Entry::Editable(marker) => {
                        let present = groups.iter().any(|g| {
                            g.entries
                                .iter()
                                .any(|e| matches!(e, Entry::Editable(m) if m == marker))
                        });
                        if !present {
                            groups[gi].entries.push(entry.clone());
                        }
                    }
                    Entry::Pin(pin) => {
                        let key = pin.name().key();
                        if let Some(earlier) = prior.get_mut(key) {
                            if earlier.version != pin.version() {
                                if !pin.is_override() {
                                    problems.push(Problem::CrossGroupConflict {
                                        package: pin.name().to_string(),
                                        first_group: earlier.group.clone(),
                                        first_version: earlier.version.clone(),
                                        second_group: group.name().to_string(),
                                        second_version: pin.version().to_string(),
                                    });
                                    continue;
                                }
                                tracing::debug!(
                                    "'{}' overridden: {} -> {}",
                                    pin.name(),
                                    earlier.version,
                                    pin.version()
                                );
                                retarget(&mut groups, &prior_lens, key, pin.version());
                                earlier.version = pin.version().to_string();
                            }
                        }

                        let prior_len = prior_lens.get(gi).copied().unwrap_or(0);
                        let already_there = groups[gi].entries[..prior_len]
                            .iter()
                            .any(|e| matches!(e, Entry::Pin(p) if p.name().key() == key));
                        if !already_there {
                            groups[gi].entries.push(Entry::Pin(pin.clone()));
                        }
                    }
                }
            }
        }
    }

    ProblemReport::into_result(problems)?;
    Ok(Manifest::from_groups(
        groups
            .into_iter()
            .map(|g| Group::new(g.name, g.entries))
            .collect(),
    ))
}

fn index_prior(groups: &[MergedGroup]) -> HashMap<String, PriorPin> {
    let mut prior = HashMap::new();
    for group in groups {
        for entry in &group.entries {
            if let Entry::Pin(pin) = entry {
                prior
                    .entry(pin.name().key().to_string())
                    .or_insert_with(|| PriorPin {
                        group: group.name.clone(),
                        version: pin.version().to_string(),
                    });
            }
        }
    }
    prior
}

/// Rewrite every pre-existing pin of `key` to `version`.
fn retarget(groups: &mut [MergedGroup], prior_lens: &[usize], key: &str, version: &str) {
    for (group, &len) in groups.iter_mut().zip(prior_lens) {
        for entry in &mut group.entries[..len] {
            if let Entry::Pin(pin) = entry {
                if pin.name().key() == key {
                    *pin = pin.with_version(version);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinset_core::parse;

    #[test]
    fn empty_input_is_empty_manifest() {
        assert_eq!(merge(&[]).unwrap(), Manifest::default());
    }

    #[test]
    fn identical_pins_are_deduplicated() {
        let a = parse("# Testing\npytest==8.3.4\n").unwrap();
        let merged = merge(&[a.clone(), a.clone()]).unwrap();
        assert_eq!(merged, a);
    }

    #[test]
    fn new_groups_are_appended_in_order() {
        let a = parse("# Testing\npytest==8.3.4\n").unwrap();
        let b = parse("# Linting\nruff==0.8.1\n\n# testing\ntrio==0.27.0\n").unwrap();
        let merged = merge(&[a, b]).unwrap();
        assert_eq!(
            merged.render(),
            "# Testing\npytest==8.3.4\ntrio==0.27.0\n\n# Linting\nruff==0.8.1\n"
        );
    }

    #[test]
    fn identical_editable_markers_collapse() {
        let a = parse("# Optionals\n-e .[full]\n").unwrap();
        let b = parse("# Extras\n-e .[full]\n").unwrap();
        let merged = merge(&[a, b]).unwrap();
        assert_eq!(merged.editable_markers().count(), 1);
    }
}
