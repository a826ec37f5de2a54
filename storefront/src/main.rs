fn main() {
    #[cfg(feature = "csr")]
    storefront::run();
}
