use crate::cli::{AdminCommand, Cli, Command, PresetArg};

use models::{Gender, PackageCode, PaymentStatus, Weekday};
use portal_core::dashboard::PaymentPreset;

use clap::Parser;

#[test]
fn given_register_flags_when_parsed_then_maps_to_domain_types() {
    let cli = Cli::try_parse_from([
        "fyw",
        "register",
        "--matric-number",
        "190401001",
        "--full-name",
        "Ada Obi",
        "--gender",
        "female",
        "--package",
        "t",
        "--day",
        "wednesday",
    ])
    .unwrap();

    match cli.command {
        Command::Register(args) => {
            assert_eq!(args.gender, Gender::Female);
            assert_eq!(args.package, PackageCode::CorporatePlus);
            assert_eq!(args.day, Some(Weekday::Wednesday));
            assert!(!args.force);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_unknown_package_when_parsed_then_clap_rejects() {
    let result = Cli::try_parse_from([
        "fyw",
        "register",
        "--matric-number",
        "190401001",
        "--full-name",
        "Ada Obi",
        "--gender",
        "female",
        "--package",
        "X",
    ]);
    assert!(result.is_err());
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_are_accepted() {
    let cli = Cli::try_parse_from([
        "fyw",
        "status",
        "--api-base-url",
        "http://localhost:4000",
        "--config-dir",
        "/tmp/fyw-test",
        "-v",
    ])
    .unwrap();

    assert!(cli.verbose);
    assert_eq!(cli.api_base_url.as_deref(), Some("http://localhost:4000"));
    assert!(matches!(cli.command, Command::Status { matric_number: None }));
}

#[test]
fn given_pay_with_amount_and_preset_when_parsed_then_conflicts() {
    assert!(Cli::try_parse_from(["fyw", "pay", "--amount", "5000", "--preset", "50"]).is_err());

    let cli = Cli::try_parse_from(["fyw", "pay", "--preset", "25"]).unwrap();
    match cli.command {
        Command::Pay(args) => {
            assert_eq!(args.preset, Some(PresetArg::Quarter));
            assert_eq!(PaymentPreset::from(PresetArg::Quarter), PaymentPreset::Quarter);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_admin_students_filters_when_parsed_then_fills_args() {
    let cli = Cli::try_parse_from([
        "fyw",
        "admin",
        "students",
        "--search",
        "obi",
        "--status",
        "FULLY_PAID",
        "--package",
        "F",
        "--page",
        "2",
    ])
    .unwrap();

    match cli.command {
        Command::Admin {
            command: AdminCommand::Students(args),
        } => {
            assert_eq!(args.search.as_deref(), Some("obi"));
            assert_eq!(args.filters.status, Some(PaymentStatus::FullyPaid));
            assert_eq!(args.filters.package, Some(PackageCode::FullExperience));
            assert_eq!(args.page, 2);
            assert_eq!(args.filters.limit, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
