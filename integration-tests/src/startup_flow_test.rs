use chain_models::ChainType;
use chain_params::{try_base_params, ChainContext};
use chainparams::{run, ChainReport, Outcome};
use std::path::PathBuf;

use crate::utils::{node_args, write_config};

fn expect_report(outcome: Outcome) -> ChainReport {
    match outcome {
        Outcome::Report(report) => report,
        Outcome::Help(help) => panic!("expected report, got help:\n{help}"),
    }
}

#[test]
fn test_startup_reports_each_reserved_chain() {
    let cases = [
        (vec![], ChainType::Main, "/data", 8332),
        (vec!["--testnet"], ChainType::Testnet, "/data/testnet3", 18332),
        (vec!["--signet"], ChainType::Signet, "/data/signet", 38332),
        (vec!["--regtest"], ChainType::Regtest, "/data/regtest", 18443),
        (vec!["--chain=test"], ChainType::Testnet, "/data/testnet3", 18332),
    ];

    for (flags, chain, data_dir, port) in cases {
        let mut argv = vec!["--datadir=/data"];
        argv.extend(flags);
        let args = node_args(&argv);

        let report = expect_report(run(&args).expect("startup should succeed"));
        assert_eq!(report.chain, chain);
        assert_eq!(report.data_dir, PathBuf::from(data_dir));
        assert_eq!(report.port, port);
    }

    // Some chain has been selected process-wide by now.
    assert!(try_base_params().is_ok());
}

#[test]
fn test_startup_with_custom_chain_from_config() {
    let (_dir, conf) = write_config("chain = \"mytestnet\"\n\n[chains.mytestnet]\nport = 28553\n");
    let conf_arg = format!("--conf={}", conf.display());
    let args = node_args(&["--datadir=/data", conf_arg.as_str()]);

    let report = expect_report(run(&args).expect("startup should succeed"));
    assert_eq!(report.chain, ChainType::Custom("mytestnet".to_string()));
    assert_eq!(report.data_dir, PathBuf::from("/data/mytestnet"));
    assert_eq!(report.default_port, 18553);
    assert_eq!(report.port, 28553);
}

#[test]
fn test_startup_with_mixed_case_chain_section() {
    let (_dir, conf) = write_config(
        "chain = \"MyChain\"\n\n[chains.MyChain]\nport = 28600\n\n[chains.mychain]\nport = 28700\n",
    );
    let conf_arg = format!("--conf={}", conf.display());
    let args = node_args(&["--datadir=/data", conf_arg.as_str()]);

    let report = expect_report(run(&args).expect("startup should succeed"));
    assert_eq!(report.chain, ChainType::Custom("MyChain".to_string()));
    assert_eq!(report.data_dir, PathBuf::from("/data/MyChain"));
    assert_eq!(report.port, 28600);
}

#[test]
fn test_report_serializes_chain_by_name() {
    let args = node_args(&["--datadir=/data", "--chain=devnet"]);
    let report = expect_report(run(&args).expect("startup should succeed"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["chain"], "devnet");
    assert_eq!(json["port"], 18553);
    assert_eq!(json["data_dir"], "/data/devnet");
}

#[test]
fn test_context_handed_to_components() {
    struct PeerListener {
        port: u16,
    }

    impl PeerListener {
        fn new(context: &ChainContext) -> Self {
            Self {
                port: context.params().default_port(),
            }
        }
    }

    let args = node_args(&["--signet"]);
    let context = ChainContext::from_args(&args).expect("chain should resolve");
    let listener = PeerListener::new(&context);

    assert_eq!(listener.port, 38332);
    assert!(context.chain().bitcoin_network().is_some());
}

#[test]
fn test_startup_rejects_unknown_config_key() {
    let (_dir, conf) = write_config("rpcuser = \"alice\"\n");
    let conf_arg = format!("--conf={}", conf.display());
    let args = node_args(&[conf_arg.as_str()]);

    let err = run(&args).unwrap_err();
    assert!(err.to_string().contains("rpcuser"));
}
