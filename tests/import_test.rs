use rs_html_tables::{read_html, read_html_with_options, DataFrame, Options};

fn import(html: &str) -> Vec<DataFrame> {
    read_html(html).expect("import failed")
}

fn table_with_rows(label: &str, rows: usize) -> String {
    let mut html = format!("<table><tr><th>{label}</th><th>value</th></tr>");
    for r in 0..rows {
        html.push_str(&format!("<tr><td>{label}{r}</td><td>{r}</td></tr>"));
    }
    html.push_str("</table>");
    html
}

const WIKI_INFO_TABLE: &str = r#"
<html><body>
<table class="wikitable">
  <caption>Wikipedia Information Table</caption>
  <tr><th>First name</th><th>Last name</th><th>Age</th></tr>
  <tr><td>Tinu</td><td>Elejogun</td><td>14</td></tr>
  <tr><td>Blaszczyk</td><td>Kostrzewski</td><td>25</td></tr>
  <tr><td>Lily</td><td>McGarrett</td><td>16</td></tr>
  <tr><td>Olatunkboh</td><td>Chijiaku</td><td>22</td></tr>
  <tr><td>Adrienne</td><td>Anthoula</td><td>22</td></tr>
  <tr><td>Axelia</td><td>Athanasios</td><td>22</td></tr>
  <tr><td>Jon-Kabat</td><td>Zinn</td><td>22</td></tr>
</table>
</body></html>
"#;

#[test]
fn wiki_info_table_uses_scraped_labels() {
    let frames = import(WIKI_INFO_TABLE);

    assert_eq!(frames.len(), 1);
    let df = &frames[0];
    assert_eq!(df.columns(), ["First name", "Last name", "Age"]);
    assert_eq!(df.shape(), (7, 3));
    assert_eq!(df.index(), ["0", "1", "2", "3", "4", "5", "6"]);
    assert_eq!(
        df.column("Age"),
        Some(vec!["14", "25", "16", "22", "22", "22", "22"])
    );
    assert_eq!(df.name(), None);
}

#[test]
fn wiki_info_table_with_user_labels() {
    let options = Options::default()
        .with_order(["FName", "LName", "Age"])
        .with_index(["One", "Two", "Three", "Four", "Five", "Six", "Seven"])
        .with_name("Wikipedia Information Table");

    let frames = read_html_with_options(WIKI_INFO_TABLE, &options).expect("import failed");
    let df = &frames[0];
    assert_eq!(df.columns(), ["FName", "LName", "Age"]);
    assert_eq!(df.name(), Some("Wikipedia Information Table"));
    assert_eq!(df.row("Seven"), Some(["Jon-Kabat".to_string(), "Zinn".to_string(), "22".to_string()].as_slice()));
}

const CLIMATE_TABLE: &str = r#"
<table class="wikitable collapsible">
  <tr><th colspan="5">Climate data for Example City</th></tr>
  <tr><th>Month</th><th>Jan</th><th>Feb</th><th>Mar</th><th>Year</th></tr>
  <tr><th>Record high °C (°F)</th><td>12</td><td>14</td><td>19</td><td>19</td></tr>
  <tr><th>Average high °C (°F)</th><td>5</td><td>7</td><td>11</td><td>8</td></tr>
  <tr><th>Daily mean °C (°F)</th><td>1</td><td>3</td><td>6</td><td>3</td></tr>
  <tr><th>Average low °C (°F)</th><td>-3</td><td>-1</td><td>2</td><td>-1</td></tr>
  <tr><td colspan="5">Source: Example Weather Service</td></tr>
</table>
"#;

#[test]
fn climate_table_row_headers_become_index() {
    let frames = import(CLIMATE_TABLE);

    assert_eq!(frames.len(), 1);
    let df = &frames[0];
    assert_eq!(df.columns(), ["Jan", "Feb", "Mar", "Year"]);
    assert_eq!(
        df.index(),
        [
            "Record high °C (°F)",
            "Average high °C (°F)",
            "Daily mean °C (°F)",
            "Average low °C (°F)",
        ]
    );
    assert_eq!(df.get(3, 0), Some("-3"));
}

#[test]
fn valid_table_and_headerless_table() {
    let html = r#"
        <table>
          <tr><th>Company</th><th>Price</th><th>Change</th><th>Value (Rs Cr.)</th></tr>
          <tr><td>Sun Pharma</td><td>502.60</td><td>-65.05</td><td>2,117.87</td></tr>
          <tr><td>Reliance</td><td>1356.90</td><td>19.60</td><td>745.10</td></tr>
          <tr><td>Tech Mahindra</td><td>379.45</td><td>-49.70</td><td>650.22</td></tr>
          <tr><td>ITC</td><td>315.85</td><td>6.75</td><td>621.12</td></tr>
          <tr><td>HDFC</td><td>1598.85</td><td>50.95</td><td>553.91</td></tr>
        </table>
        <table>
          <tr><th>Note</th></tr>
          <tr><td>a</td><td>b</td></tr>
        </table>
    "#;

    let frames = import(html);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].columns().len(), 4);
    assert_eq!(frames[0].shape().0, 5);
    assert_eq!(frames[0].get(0, 0), Some("Sun Pharma"));
}

#[test]
fn frames_follow_document_order() {
    let html = format!(
        "{}<div>{}</div>{}",
        table_with_rows("t1", 1),
        table_with_rows("t2", 2),
        table_with_rows("t3", 3)
    );

    let frames = import(&html);
    let firsts: Vec<&str> = frames.iter().map(|df| df.columns()[0].as_str()).collect();
    assert_eq!(firsts, ["t1", "t2", "t3"]);
    assert_eq!(
        frames.iter().map(|df| df.shape().0).collect::<Vec<_>>(),
        [1, 2, 3]
    );
}

#[test]
fn pattern_selects_matching_tables() {
    let html = r#"
        <table>
          <tr><th>Month</th><th>2001</th><th>2000</th></tr>
          <tr><th>January</th><td>265,603</td><td>184,381</td></tr>
          <tr><th>February</th><td>249,259</td><td>264,066</td></tr>
          <tr><th>Total</th><td>514,862</td><td>448,447</td></tr>
        </table>
        <table>
          <tr><th>Airline</th><th>Share</th></tr>
          <tr><td>Air Macau</td><td>40%</td></tr>
        </table>
    "#;
    let options = Options::default()
        .with_pattern("2001")
        .with_name("Year-wise Passengers Figure");

    let frames = read_html_with_options(html, &options).expect("import failed");
    assert_eq!(frames.len(), 1);
    let df = &frames[0];
    assert_eq!(df.columns(), ["2001", "2000"]);
    assert_eq!(df.index(), ["January", "February", "Total"]);
    assert_eq!(df.column("2001"), Some(vec!["265,603", "249,259", "514,862"]));
    assert_eq!(df.name(), Some("Year-wise Passengers Figure"));
}

#[test]
fn pattern_without_match_gives_empty_result() {
    let options = Options::default().with_pattern("Sun Pharma");

    let frames = read_html_with_options(WIKI_INFO_TABLE, &options).expect("import failed");
    assert!(frames.is_empty());
}

#[test]
fn thead_and_tbody_sections() {
    let html = r#"
        <table>
          <thead><tr><th>PartyName</th><th>Votes Wise(%)</th></tr></thead>
          <tbody>
            <tr><td>Party A</td><td>41.2</td></tr>
            <tr><td>Party B</td><td>33.9</td></tr>
            <tr><td></td><td></td></tr>
          </tbody>
        </table>
    "#;

    let frames = import(html);
    assert_eq!(frames[0].columns(), ["PartyName", "Votes Wise(%)"]);
    assert_eq!(frames[0].shape(), (2, 2));
}

#[test]
fn malformed_tables_are_skipped_silently() {
    let html = r#"
        <table></table>
        <table><tr><td>no</td><td>headers</td></tr></table>
        <table>
          <tr><th></th><th>a</th></tr>
          <tr><th>r1</th><td>1</td></tr>
          <tr><th>r2</th></tr>
        </table>
    "#;

    assert!(import(html).is_empty());
}

#[test]
fn nested_table_rows_count_toward_the_outer_table() {
    let html = r#"
        <table id="outer">
          <tr><th>a</th><th>b</th></tr>
          <tr>
            <td>1</td>
            <td><table id="inner"><tr><th>x</th></tr><tr><td>y</td></tr></table></td>
          </tr>
        </table>
    "#;

    // The outer table picks up the inner `th` row and a 3-wide data row, so
    // only the inner table survives.
    let frames = import(html);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].columns(), ["x"]);
    assert_eq!(frames[0].index(), ["0"]);
    assert_eq!(frames[0].get(0, 0), Some("y"));
}

#[test]
fn document_without_tables() {
    assert!(import("<html><body><p>Plain text</p></body></html>").is_empty());
    assert!(import("").is_empty());
}
