use clap::Parser;
use supplierdb_core::{NoMatchPolicy, PhoneFormatter, SupplierRecord, SupplierType};

use super::{Cli, Commands};
use crate::terminal::{is_yes, render_record, render_table};

fn record() -> SupplierRecord {
    SupplierRecord {
        id: Some("7".into()),
        name: "Ana Souza".into(),
        email: "ana@x.com".into(),
        phone_numbers: vec!["11987654321".into(), "2133334444".into()],
        supplier_type: Some(SupplierType::Distribuidor),
        note: "entrega às terças".into(),
    }
}

#[test]
fn create_collects_repeated_phone_flags() {
    let cli = Cli::try_parse_from([
        "supplierdb-cli",
        "create",
        "--name",
        "Ana",
        "--email",
        "ana@x.com",
        "--phone",
        "11987654321",
        "--phone",
        "2133334444",
        "--type",
        "Distribuidor",
    ])
    .expect("create should parse");

    match cli.command {
        Commands::Create {
            phones,
            supplier_type,
            note,
            ..
        } => {
            assert_eq!(phones, vec!["11987654321", "2133334444"]);
            assert_eq!(supplier_type, "Distribuidor");
            assert_eq!(note, "");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn create_requires_a_phone() {
    let result = Cli::try_parse_from([
        "supplierdb-cli",
        "create",
        "--name",
        "Ana",
        "--email",
        "ana@x.com",
        "--type",
        "Distribuidor",
    ]);
    assert!(result.is_err());
}

#[test]
fn update_fields_are_optional() {
    let cli = Cli::try_parse_from(["supplierdb-cli", "update", "42", "--note", "novo"])
        .expect("update should parse");

    match cli.command {
        Commands::Update {
            id,
            name,
            phones,
            note,
            ..
        } => {
            assert_eq!(id, "42");
            assert!(name.is_none());
            assert!(phones.is_empty());
            assert_eq!(note.as_deref(), Some("novo"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn delete_defaults_to_asking() {
    let cli = Cli::try_parse_from(["supplierdb-cli", "delete", "42"]).expect("delete should parse");
    assert!(matches!(cli.command, Commands::Delete { yes: false, .. }));

    let cli = Cli::try_parse_from(["supplierdb-cli", "delete", "42", "--yes"])
        .expect("delete --yes should parse");
    assert!(matches!(cli.command, Commands::Delete { yes: true, .. }));
}

#[test]
fn yes_answers() {
    for answer in ["y", "Y\n", " yes ", "s", "Sim"] {
        assert!(is_yes(answer), "{answer:?} should confirm");
    }
    for answer in ["", "n", "no", "nao", "yess"] {
        assert!(!is_yes(answer), "{answer:?} should decline");
    }
}

#[test]
fn table_shows_formatted_phones() {
    let formatter = PhoneFormatter::new(NoMatchPolicy::StrippedDigits);
    let table = render_table(&[record()], &formatter);

    let mut lines = table.lines();
    assert!(lines.next().is_some_and(|header| header.starts_with("ID")));
    let row = lines.next().expect("one row");
    assert!(row.starts_with('7'));
    assert!(row.contains("(11) 98765-4321"));
    assert!(row.contains("Distribuidor"));
    assert!(lines.next().is_none());
}

#[test]
fn record_lists_each_phone_on_its_own_line() {
    let formatter = PhoneFormatter::new(NoMatchPolicy::StrippedDigits);
    let text = render_record(&record(), &formatter);

    assert!(text.contains("\n  (11) 98765-4321\n"));
    assert!(text.contains("\n  2133334444\n"));
    assert!(text.contains("Note:  entrega às terças"));
}

#[test]
fn record_without_phones_or_note() {
    let formatter = PhoneFormatter::new(NoMatchPolicy::StrippedDigits);
    let mut bare = record();
    bare.phone_numbers.clear();
    bare.note.clear();
    bare.supplier_type = None;

    let text = render_record(&bare, &formatter);
    assert!(text.contains("Type:  \u{2014}"));
    assert!(text.contains("Phones:\n  \u{2014}\n"));
    assert!(!text.contains("Note:"));
}

#[test]
fn help_and_usage_errors_come_from_parsing_alone() {
    let help = Cli::try_parse_from(["supplierdb-cli", "--help"]).unwrap_err();
    assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

    let missing = Cli::try_parse_from(["supplierdb-cli"]).unwrap_err();
    assert!(matches!(
        missing.kind(),
        clap::error::ErrorKind::MissingSubcommand
            | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ));
}
