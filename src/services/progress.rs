use crate::{
    config::Config,
    models::{PaperCategory, WritingProject},
    store::Store,
};

/// Finds the section with the lowest completion ratio
///
/// Projects are scanned in the order given and sections in insertion order.
/// On ties the first section encountered wins. Returns `None` when there are
/// no sections at all.
pub fn lowest_progress_section<'a>(
    projects: impl IntoIterator<Item = &'a WritingProject>,
) -> Option<&'a str> {
    let mut lowest: Option<(&'a str, f64)> = None;

    for project in projects {
        for (name, section) in project.sections.iter() {
            let ratio = section.completion_ratio();
            if lowest.map_or(true, |(_, best)| ratio < best) {
                lowest = Some((name.as_str(), ratio));
            }
        }
    }

    lowest.map(|(name, _)| name)
}

/// Paper category that would help the user's weakest section
pub fn preferred_category(store: &Store, config: &Config, user_id: &str) -> Option<PaperCategory> {
    lowest_progress_section(store.projects_for(user_id))
        .and_then(|section| config.category_for_section(section))
}
