use std::io::Write;

mod output;
pub use output::Output;

mod error;
pub use error::HashError;

pub mod io;
pub mod sha2;

/// 哈希算法实现该trait, 计算消息的摘要. 可直接调用`Digest::digest(msg)`生成消息的摘要,
/// 文件和其它数据源可使用[`io::digest_file`]/[`io::digest_stream`]以有界内存流式处理.
///
/// 可用于如下安全应用中:
/// - 数据一致性验证;
/// - 参与数字签名的生成和验证;
/// - 密钥派生;
/// - 伪随机数生成;
pub trait Digest: Write {
    /// 哈希算法每次按块处理消息的块的位长度
    const BLOCK_BITS: usize;
    /// 哈希算法将每个块按该位长度划分为若干个单词
    const WORD_BITS: usize;
    /// 哈希算法生成的摘要的位长度
    const DIGEST_BITS: usize;

    /// 生成消息摘要
    fn digest(msg: &[u8]) -> Output<Self>;

    /// 生成消息摘要
    fn finalize(&mut self) -> Output<Self>;

    /// 重置哈希算法到初始化状态
    fn reset(&mut self);
}

/// [`Digest`]的对象安全版本, 数据通过`Write`写入
pub trait DigestX: Write {
    fn block_bits_x(&self) -> usize;
    fn word_bits_x(&self) -> usize;
    fn digest_bits_x(&self) -> usize;
    fn finish_x(&mut self) -> Vec<u8>;
    fn reset_x(&mut self);
}

impl<T> DigestX for T
where
    T: Digest,
{
    fn block_bits_x(&self) -> usize {
        <T as Digest>::BLOCK_BITS
    }

    fn word_bits_x(&self) -> usize {
        <T as Digest>::WORD_BITS
    }

    fn digest_bits_x(&self) -> usize {
        <T as Digest>::DIGEST_BITS
    }

    fn finish_x(&mut self) -> Vec<u8> {
        self.finalize().to_vec()
    }

    fn reset_x(&mut self) {
        self.reset()
    }
}
