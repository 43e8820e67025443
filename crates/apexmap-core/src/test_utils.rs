//! Test utilities for apexmap-core

use std::fs;
use tempfile::TempDir;

/// A small but complete Apex corpus manifest, acyclic, with a
/// prerequisite diamond (`batch` requires both `apex dml` and `soql`).
pub const SAMPLE_MANIFEST: &str = r#"{
  "name": "apex-docs",
  "description": "Salesforce Apex language documentation corpus",
  "version": "1.2.0",
  "default_doc": "topics/core-concepts.md",
  "totalSnippets": 42,
  "topics": [
    {
      "name": "apex core concepts",
      "file": "topics/core-concepts.md",
      "related": [],
      "prerequisites": [],
      "leads_to": ["apex data types"],
      "tags": ["fundamentals"],
      "difficulty": "beginner",
      "use_cases": ["first steps on the platform"]
    },
    {
      "name": "apex data types",
      "file": "topics/data-types.md",
      "related": ["apex core concepts"],
      "prerequisites": ["apex core concepts"],
      "leads_to": ["apex dml", "soql"],
      "tags": ["fundamentals", "types"],
      "difficulty": "beginner",
      "use_cases": ["modeling records"]
    },
    {
      "name": "apex dml",
      "file": "topics/dml.md",
      "related": ["soql"],
      "prerequisites": ["apex core concepts", "apex data types"],
      "leads_to": ["batch"],
      "tags": ["dml", "bulkify"],
      "difficulty": "intermediate",
      "use_cases": ["writing records", "bulk updates"]
    },
    {
      "name": "soql",
      "file": "topics/soql.md",
      "related": ["apex dml"],
      "prerequisites": ["apex data types"],
      "leads_to": ["batch"],
      "tags": ["soql", "query", "bulkify"],
      "difficulty": "intermediate",
      "use_cases": ["reading records"]
    },
    {
      "name": "batch",
      "file": "topics/batch.md",
      "related": ["soql"],
      "prerequisites": ["apex dml", "soql"],
      "leads_to": [],
      "tags": ["batch", "async", "bulkify"],
      "difficulty": "advanced",
      "use_cases": ["large data volumes"]
    }
  ]
}"#;

pub const BATCH_BODY: &str = "# Batch Apex\n\n\
Batch Apex processes large record sets in chunks of up to 200 records.\n\n\
```apex\nglobal class Cleanup implements Database.Batchable<SObject> {\n    \
global Database.QueryLocator start(Database.BatchableContext bc) {\n        \
return Database.getQueryLocator('SELECT Id FROM Account');\n    }\n}\n```\n";

/// Write the sample corpus (manifest plus bodies) into a temp directory.
pub fn sample_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("topics")).unwrap();
    fs::write(root.join("manifest.json"), SAMPLE_MANIFEST).unwrap();
    fs::write(
        root.join("topics/core-concepts.md"),
        "# Apex Core Concepts\n\nApex is a strongly typed, object-oriented language.\n",
    )
    .unwrap();
    fs::write(
        root.join("topics/data-types.md"),
        "# Apex Data Types\n\nPrimitives, sObjects, collections, and enums.\n",
    )
    .unwrap();
    fs::write(
        root.join("topics/dml.md"),
        "# Apex DML\n\ninsert, update, upsert, delete, undelete, merge.\n",
    )
    .unwrap();
    fs::write(
        root.join("topics/soql.md"),
        "# SOQL\n\nSalesforce Object Query Language.\n",
    )
    .unwrap();
    fs::write(root.join("topics/batch.md"), BATCH_BODY).unwrap();
    dir
}

/// Parse the sample manifest, apply `mutate` to the raw JSON value, and
/// re-serialize. Used to derive invalid manifests from the valid sample.
pub fn mutated_manifest(mutate: impl FnOnce(&mut serde_json::Value)) -> String {
    let mut value: serde_json::Value = serde_json::from_str(SAMPLE_MANIFEST).unwrap();
    mutate(&mut value);
    value.to_string()
}
