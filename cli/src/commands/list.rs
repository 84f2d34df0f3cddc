//! `socrange list` - print the use case catalog as a table.

use socrange_core::api::{catalog, CliError, UseCase};

use super::cli::ListArgs;

pub fn handle_list(args: ListArgs) -> Result<i32, CliError> {
    let matches = filter_catalog(&args);

    if matches.is_empty() {
        println!("No use cases match.");
        return Ok(0);
    }

    println!("{:<4} {:<9} {:<22} TITLE", "ID", "SEVERITY", "CATEGORY");
    for uc in &matches {
        println!(
            "{:<4} {:<9} {:<22} {}",
            uc.id,
            uc.severity.as_str(),
            uc.category,
            uc.title
        );
    }
    println!(
        "\n{} of {} use cases. Categories: {}",
        matches.len(),
        catalog::all().len(),
        catalog::categories().join(", ")
    );

    Ok(0)
}

fn filter_catalog(args: &ListArgs) -> Vec<&'static UseCase> {
    let mut matches = match args.query.as_deref() {
        Some(q) => catalog::search(q),
        None => catalog::all().iter().collect(),
    };
    if let Some(category) = args.category.as_deref() {
        matches.retain(|uc| uc.category.eq_ignore_ascii_case(category));
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_returns_the_whole_catalog() {
        let matches = filter_catalog(&ListArgs::default());
        assert_eq!(matches.len(), catalog::all().len());
    }

    #[test]
    fn query_and_category_filters_compose() {
        let args = ListArgs {
            query: Some("detection".into()),
            category: Some("malware execution".into()),
        };
        let matches = filter_catalog(&args);
        assert!(matches
            .iter()
            .all(|uc| uc.category.eq_ignore_ascii_case("malware execution")));
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let args = ListArgs {
            query: None,
            category: Some("no-such-category".into()),
        };
        assert!(filter_catalog(&args).is_empty());
    }
}
