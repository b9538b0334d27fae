use std::error::Error;

use serde::Serialize;

use crate::core::app::TabKind;
use crate::core::content::ContentRegistry;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SectionSummary {
    pub index: usize,
    pub name: String,
    /// Record variant, or `None` for an empty section.
    pub kind: Option<&'static str>,
    pub component: &'static str,
    pub records: usize,
}

pub fn summarize(registry: &ContentRegistry) -> Vec<SectionSummary> {
    registry
        .sections()
        .iter()
        .enumerate()
        .map(|(i, section)| SectionSummary {
            index: i + 1,
            name: section.name.clone(),
            kind: section.kind().map(|kind| kind.as_str()),
            component: TabKind::for_section(section).as_str(),
            records: section.records.len(),
        })
        .collect()
}

pub fn print_sections(registry: &ContentRegistry, json: bool) -> Result<(), Box<dyn Error>> {
    let summaries = summarize(registry);
    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for line in format_table(registry.title(), &summaries) {
        println!("{line}");
    }
    Ok(())
}

fn format_table(title: &str, summaries: &[SectionSummary]) -> Vec<String> {
    let name_width = summaries
        .iter()
        .map(|s| s.name.chars().count())
        .chain(std::iter::once("Section".len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        format!("{title}:"),
        String::new(),
        format!(
            "  #  {:<name_width$}  {:<10}  {:<8}  Records",
            "Section", "Kind", "View"
        ),
    ];
    for summary in summaries {
        lines.push(format!(
            "  {:<2} {:<name_width$}  {:<10}  {:<8}  {}",
            summary.index,
            summary.name,
            summary.kind.unwrap_or("-"),
            summary.component,
            summary.records
        ));
    }
    lines
}
