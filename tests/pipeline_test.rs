//! Integration tests for the text extraction pipeline.

use pdfstruct::extract::{is_table_row, ExtractOptions, TextExtractor};
use pdfstruct::{extract_text_data, extract_text_data_with_options, process_text, ChartType};

const REPORT: &str = "\
QUARTERLY REPORT
Prepared By: Finance Team
Report Date: March 15, 2024

Region    Q1    Q2
North    120    130
South    90    95
West    70    88

Key Findings
- Revenue grew in every region
- Costs stayed flat
* Hiring resumes 04/01/2024

Next Steps
1. Review budget
2. Publish summary on 2024-04-15";

#[test]
fn test_three_lines_make_a_table_two_do_not() {
    let three = "Region    Sales 2024\nNorth America    1200\nSouth America    950";
    let data = extract_text_data(three).unwrap();
    assert_eq!(data.tables.len(), 1);
    assert_eq!(data.tables[0].headers, vec!["Region", "Sales 2024"]);
    assert_eq!(data.tables[0].rows.len(), 2);

    let two = "Region    Sales 2024\nNorth America    1200";
    assert!(extract_text_data(two).unwrap().tables.is_empty());
}

#[test]
fn test_min_table_rows_is_configurable() {
    let two = "Region    Sales 2024\nNorth America    1200";
    let options = ExtractOptions::new().with_min_table_rows(2);
    let data = extract_text_data_with_options(two, &options).unwrap();

    assert_eq!(data.tables.len(), 1);
    assert_eq!(data.tables[0].rows, vec![vec!["North America", "1200"]]);
}

#[test]
fn test_short_gapped_line_is_not_a_table_row() {
    assert!(!is_table_row("a  1"));

    let data = extract_text_data("a  1\nb  2\nc  3").unwrap();
    assert!(data.tables.is_empty());
}

#[test]
fn test_extraction_is_repeatable() {
    let extractor = TextExtractor::new(ExtractOptions::default()).unwrap();
    let first = extractor.extract(REPORT);
    let second = extractor.extract(REPORT);
    assert_eq!(first, second);

    let fresh = TextExtractor::new(ExtractOptions::default()).unwrap();
    assert_eq!(fresh.extract(REPORT), first);
}

#[test]
fn test_key_value_labels_are_letters_only() {
    let data = extract_text_data("Revenue: 1200\nRevenue 2: 1200").unwrap();
    let pairs = &data.structured_data.key_value_pairs;

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].key, "Revenue");
    assert_eq!(pairs[0].value, "1200");
}

#[test]
fn test_dates_grouped_by_pattern() {
    let data = extract_text_data("Due 03/15/2024 and again 2024-03-16").unwrap();
    let values: Vec<&str> = data.dates.iter().map(|d| d.value.as_str()).collect();
    assert_eq!(values, vec!["03/15/2024", "2024-03-16"]);

    // Later pattern first in the text still comes second
    let data = extract_text_data("Shipped 2024-01-02, billed 01/05/2024").unwrap();
    let values: Vec<&str> = data.dates.iter().map(|d| d.value.as_str()).collect();
    assert_eq!(values, vec!["01/05/2024", "2024-01-02"]);
}

#[test]
fn test_number_positions_count_characters() {
    let data = extract_text_data("Café 42").unwrap();
    assert_eq!(data.numbers.len(), 1);
    assert_eq!(data.numbers[0].value, 42.0);
    assert_eq!(data.numbers[0].position, 5);
    assert_eq!(data.numbers[0].context, "Café 42");
}

#[test]
fn test_single_sentence_yields_nothing() {
    let result = process_text("The weather was pleasant all week long.");
    assert!(result.success);
    assert!(result.error.is_none());

    let data = result.extracted_data.unwrap();
    assert!(data.is_empty());
    assert_eq!(data.text, "The weather was pleasant all week long.");
}

#[test]
fn test_empty_text() {
    let data = extract_text_data("").unwrap();
    assert!(data.is_empty());
    assert!(data.text.is_empty());
}

#[test]
fn test_full_report() {
    let data = extract_text_data(REPORT).unwrap();

    assert_eq!(data.tables.len(), 1);
    let table = &data.tables[0];
    assert_eq!(table.id, "table_1");
    assert_eq!(table.headers, vec!["Region", "Q1", "Q2"]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[2], vec!["West", "70", "88"]);

    let keys: Vec<&str> = data
        .structured_data
        .key_value_pairs
        .iter()
        .map(|kv| kv.key.as_str())
        .collect();
    assert_eq!(keys, vec!["Prepared By", "Report Date"]);

    let lists = &data.structured_data.lists;
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].len(), 3);
    assert_eq!(lists[1], vec!["1. Review budget", "2. Publish summary on 2024-04-15"]);

    let titles: Vec<&str> = data
        .structured_data
        .sections
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert!(titles.contains(&"QUARTERLY REPORT"));
    assert!(titles.contains(&"Key Findings"));
    assert!(titles.contains(&"Next Steps"));

    let dates: Vec<&str> = data.dates.iter().map(|d| d.value.as_str()).collect();
    assert_eq!(dates, vec!["04/01/2024", "2024-04-15", "March 15, 2024"]);
}

#[test]
fn test_report_chart_suggestions() {
    let data = extract_text_data(REPORT).unwrap();
    let viz = pdfstruct::visualize(&data);

    let types: Vec<ChartType> = viz.charts.iter().map(|c| c.chart_type).collect();
    assert_eq!(types, vec![ChartType::Bar, ChartType::Line, ChartType::Scatter]);
    assert_eq!(viz.charts[0].title, "Bar Chart: Region vs Q1");
    assert_eq!(viz.charts[2].x_axis, "Q1");
    assert_eq!(viz.charts[2].y_axis, "Q2");
}

#[test]
fn test_result_wire_shape() {
    let result = process_text("Total: 42");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert!(json.get("metadata").is_none());
    assert_eq!(
        json["extractedData"]["structuredData"]["keyValuePairs"][0]["key"],
        "Total"
    );
    assert_eq!(json["extractedData"]["numbers"][0]["value"], 42.0);
    assert_eq!(json["extractedData"]["numbers"][0]["position"], 7);
}
