use std::collections::BTreeSet;

use quill_core::entities::SuggestedSubtask;

/// Which suggestions `task create` should keep.
///
/// No `--select` keeps the whole batch; `--no-subtasks` keeps none.
pub fn resolve_selection(
    raw: Option<&str>,
    no_subtasks: bool,
    batch: &[SuggestedSubtask],
) -> anyhow::Result<BTreeSet<usize>> {
    if no_subtasks {
        return Ok(BTreeSet::new());
    }
    let Some(raw) = raw else {
        return Ok(batch.iter().map(|s| s.index).collect());
    };

    let mut selected = BTreeSet::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let index: usize = part
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid --select entry '{part}': expected an index"))?;
        if !batch.iter().any(|s| s.index == index) {
            anyhow::bail!(
                "--select index {index} is out of range (suggestions: 0..{})",
                batch.len()
            );
        }
        selected.insert(index);
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use quill_core::entities::SuggestedSubtask;

    use super::resolve_selection;

    fn batch(n: usize) -> Vec<SuggestedSubtask> {
        (0..n)
            .map(|index| SuggestedSubtask {
                index,
                title: format!("Step {index}"),
                priority: None,
            })
            .collect()
    }

    #[test]
    fn no_select_keeps_everything() {
        let selected = resolve_selection(None, false, &batch(3)).unwrap();
        assert_eq!(selected.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn no_subtasks_keeps_nothing() {
        assert!(resolve_selection(None, true, &batch(3)).unwrap().is_empty());
    }

    #[test]
    fn parses_list_with_spaces_and_duplicates() {
        let selected = resolve_selection(Some(" 2, 0,2 ,"), false, &batch(3)).unwrap();
        assert_eq!(selected.into_iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(resolve_selection(Some("5"), false, &batch(3)).is_err());
        assert!(resolve_selection(Some("first"), false, &batch(3)).is_err());
    }

    #[test]
    fn empty_select_keeps_nothing() {
        assert!(resolve_selection(Some(""), false, &batch(3)).unwrap().is_empty());
    }
}
