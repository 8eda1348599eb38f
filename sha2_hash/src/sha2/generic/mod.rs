mod sha256;
mod sha512;
