use chain_args::{ArgFlags, ArgsManager, OptionsCategory};
use tracing::debug;

/// Register the chain selection options and the chain-specific debug knobs.
pub fn setup_chain_params_base_options(args: &ArgsManager) {
    args.add_arg(
        "-chain=<chain>",
        "Use the chain <chain> (default: main). Reserved values: main, test, signet, regtest. \
         With any other value, a custom chain is used. All regtest-only options are available \
         in custom chains too.",
        ArgFlags::ALLOW_ANY,
        OptionsCategory::ChainParams,
    );
    args.add_arg(
        "-regtest",
        "Enter regression test mode, which uses a special chain in which blocks can be solved \
         instantly. This is intended for regression testing tools and app development. \
         Equivalent to -chain=regtest.",
        ArgFlags::ALLOW_ANY | ArgFlags::DEBUG_ONLY,
        OptionsCategory::ChainParams,
    );
    args.add_arg(
        "-segwitheight=<n>",
        "Set the activation height of segwit. -1 to disable. (regtest-only)",
        ArgFlags::ALLOW_ANY | ArgFlags::DEBUG_ONLY,
        OptionsCategory::DebugTest,
    );
    args.add_arg(
        "-testnet",
        "Use the test chain. Equivalent to -chain=test.",
        ArgFlags::ALLOW_ANY,
        OptionsCategory::ChainParams,
    );
    args.add_arg(
        "-vbparams=deployment:start:end",
        "Use given start/end times for specified version bits deployment (regtest-only)",
        ArgFlags::ALLOW_ANY | ArgFlags::DEBUG_ONLY,
        OptionsCategory::ChainParams,
    );
    args.add_arg(
        "-signet",
        "Use the signet chain. Note that the network is defined by the signet_blockscript \
         parameter",
        ArgFlags::ALLOW_ANY,
        OptionsCategory::ChainParams,
    );
    args.add_arg(
        "-signet_blockscript",
        "Blocks must satisfy the given script to be considered valid (only for signet networks)",
        ArgFlags::ALLOW_STRING,
        OptionsCategory::ChainParams,
    );
    args.add_arg(
        "-signet_enforcescript",
        "Blocks must satisfy the given script to be considered valid (this replaces \
         -signet_blockscript, and is used for opt-in-reorg mode)",
        ArgFlags::ALLOW_STRING,
        OptionsCategory::ChainParams,
    );
    args.add_arg(
        "-is_test_chain",
        "Whether it's allowed to set -acceptnonstdtxn=0 for this chain or not. Default: 1 \
         (regtest-only)",
        ArgFlags::ALLOW_ANY | ArgFlags::DEBUG_ONLY,
        OptionsCategory::ChainParams,
    );

    debug!("Registered chain selection options");
}
