fn main() {
    multiversx_sc_meta_lib::cli_main::<royalty_bank::AbiProvider>();
}
