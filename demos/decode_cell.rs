//! Decodes a base cell plus an optional update sequence and prints a
//! feature-count summary.

use s57::{parse, FeatureStore, ParseOptions, UpdateProcessor};

fn main() {
    let mut args = std::env::args().skip(1);
    let base_path = args.next().expect("Must provide a path to a base cell (.000)");
    let update_paths: Vec<String> = args.collect();

    let base = std::fs::read(&base_path).expect("Unable to read base cell");
    let dataset = parse(&base, ParseOptions::production()).expect("Unable to parse base cell");

    println!("{}: {} features", base_path, dataset.features.len());
    for (acronym, count) in dataset.summary() {
        println!("  {acronym}: {count}");
    }
    if let Some(bounds) = dataset.bounds {
        println!(
            "  bounds: ({:.4}, {:.4}) - ({:.4}, {:.4})",
            bounds.min.0, bounds.min.1, bounds.max.0, bounds.max.1
        );
    }
    if !dataset.warnings.is_empty() {
        println!("  {} warning(s) during base cell parse", dataset.warnings.len());
    }

    if update_paths.is_empty() {
        return;
    }

    let cell_name = base_path
        .rsplit('/')
        .next()
        .unwrap_or(&base_path)
        .trim_end_matches(".000")
        .to_string();

    let update_bytes: Vec<Vec<u8>> = update_paths
        .iter()
        .map(|path| std::fs::read(path).expect("Unable to read update file"))
        .collect();
    let update_refs: Vec<&[u8]> = update_bytes.iter().map(|bytes| bytes.as_slice()).collect();

    let mut store = FeatureStore::from_base_features(dataset.features);
    let summary = UpdateProcessor::apply_sequential_updates(
        &cell_name,
        &update_refs,
        &mut store,
        ParseOptions::production(),
    )
    .expect("Unable to apply update sequence");

    println!(
        "applied {} update(s): inserted={} modified={} deleted={} final_record_version={}",
        summary.applied.len(),
        summary.inserted,
        summary.modified,
        summary.deleted,
        summary.final_record_version
    );
    println!("{} features after updates", store.len());
}
