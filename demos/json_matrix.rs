use amdorder::amd::*;

fn main() {
    // Matrix read from JSON text; the "x" entries are not numbers and
    // are reported, but still count as nonzeros

    let text = r#"
        [[4, 1, 0, 0, 1],
         [1, 4, 1, 0, 0],
         [0, 1, 4, "x", 0],
         [0, 0, "x", 4, 1],
         [1, 0, 0, 1, 4]]
    "#;
    let matrix: serde_json::Value = serde_json::from_str(text).unwrap();

    let settings: AmdSettings = serde_json::from_str(r#"{"verbose": true}"#).unwrap();

    let ordering = order_json(&matrix, &settings).unwrap();

    println!("Permutation = {:?}", ordering.permutation.to_vec());
    for w in &ordering.warnings {
        println!("warning: {}", w);
    }
    println!(
        "Info = {}",
        serde_json::to_string_pretty(&ordering.info).unwrap()
    );
}
