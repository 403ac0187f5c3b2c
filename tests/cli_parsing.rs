use clap::Parser;
use confile::cli::commands::resolve::{resolve, ResolveArgs};
use confile::cli::{Cli, Commands};
use confile::infrastructure::logging::LogFormat;
use std::path::PathBuf;

#[test]
fn test_parse_show_defaults() {
    temp_env::with_vars_unset(
        ["CONFILE_FORMAT", "CONFILE_REQUIRED", "CONFILE_LOG_LEVEL"],
        || {
            let cli = Cli::try_parse_from(vec!["confile", "show", "app.yaml"]).unwrap();

            assert!(!cli.json);
            assert_eq!(cli.log_level, "warn");
            match cli.command {
                Commands::Show(args) => {
                    assert_eq!(args.path, PathBuf::from("app.yaml"));
                    assert!(args.format.is_empty());
                    assert!(!args.required);
                    assert!(!args.provenance);
                }
                Commands::Resolve(_) => panic!("Wrong command"),
            }
        },
    );
}

#[test]
fn test_parse_show_with_flags() {
    let cli = Cli::try_parse_from(vec![
        "confile",
        "show",
        "settings.conf",
        "--format",
        "toml",
        "--required",
        "--provenance",
        "--json",
    ])
    .unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::Show(args) => {
            assert_eq!(args.format, "toml");
            assert!(args.required);
            assert!(args.provenance);
        }
        Commands::Resolve(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_resolve() {
    let cli = Cli::try_parse_from(vec!["confile", "resolve", "app.yml", "-f", "json"]).unwrap();

    match cli.command {
        Commands::Resolve(args) => {
            assert_eq!(args.format, "json");
            assert_eq!(resolve(&args).unwrap().parser, "json");
        }
        Commands::Show(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_show_options_from_env() {
    temp_env::with_vars(
        [
            ("CONFILE_FORMAT", Some("yaml")),
            ("CONFILE_REQUIRED", Some("true")),
        ],
        || {
            let cli = Cli::try_parse_from(vec!["confile", "show", "app.conf"]).unwrap();
            match cli.command {
                Commands::Show(args) => {
                    assert_eq!(args.format, "yaml");
                    assert!(args.required);
                }
                Commands::Resolve(_) => panic!("Wrong command"),
            }
        },
    );
}

#[test]
fn test_logging_flags_build_log_config() {
    temp_env::with_var("CONFILE_LOG_LEVEL", Some("debug"), || {
        let cli = Cli::try_parse_from(vec![
            "confile",
            "resolve",
            "a.json",
            "--log-format",
            "json",
            "--log-dir",
            "/tmp/confile-logs",
        ])
        .unwrap();

        let config = cli.log_config();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/confile-logs")));
    });
}

#[test]
fn test_resolve_rejects_unknown_extension() {
    let args = ResolveArgs {
        path: PathBuf::from("notes.txt"),
        format: String::new(),
    };
    assert!(resolve(&args).is_err());
}

#[test]
fn test_missing_path_is_rejected() {
    assert!(Cli::try_parse_from(vec!["confile", "show"]).is_err());
}
