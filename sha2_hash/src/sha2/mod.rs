//! 实现标准: [FIPS 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf)

use std::ops::{BitAnd, BitXor, Not};

#[inline]
fn f_ch<T>(x: T, y: T, z: T) -> T
where
    T: Not<Output = T> + BitXor<Output = T> + BitAnd<Output = T> + Copy,
{
    (x & y) ^ ((!x) & z)
}

#[inline]
fn f_maj<T>(x: T, y: T, z: T) -> T
where
    T: Not<Output = T> + BitXor<Output = T> + BitAnd<Output = T> + Copy,
{
    (x & y) ^ (x & z) ^ (y & z)
}

/// 数据按块划分, 完整的块直接进入压缩函数, 不完整的尾部数据暂存在工作缓冲中.
/// 最终填充0x80标记字节和0字节, 使数据长度对齐到块内$PAD_BYTES字节边界, 再将
/// 数据的位长度按大端序填充到块尾的长度域中, 使填充后的总长度是块长度的整数倍.
/// 长度域宽度是BLOCK_SIZE - $PAD_BYTES字节, 但位长度计数只使用64位, SHA-384/512
/// 的16字节长度域高8字节恒为0, 可正确哈希的输入位长度上限是2^64.<br>
/// <br>
/// $NAME: 结构体的名字<br>
/// $WORD_TYPE: 存储一个单词使用的类型<br>
/// $BLOCK_BITS: 块位长度<br>
/// $WORD_BITS: 单词位长度<br>
/// $DIGEST_BITS: 摘要位长度<br>
/// $PAD_BYTES: 数据域的块内字节边界, 此后是长度域<br>
/// $ROUNDS: 压缩轮数, 即$K常量个数<br>
/// $INIT_CONST: 摘要初始化常量值, 参考FIPS 180-4<br>
/// $K_CONST: 哈希过程中的轮常量值, 参考FIPS 180-4
macro_rules! sha2_variant {
    (
        $NAME: ident,
        $WORD_TYPE: ty,
        $BLOCK_BITS: literal,
        $WORD_BITS: literal,
        $DIGEST_BITS: literal,
        $PAD_BYTES: literal,
        $ROUNDS: literal,
        $INIT_CONST: expr,
        $K_CONST: expr
    ) => {
        use crate::{Digest, Output};
        use std::io::Write;
        #[cfg(feature = "sec-zeroize")]
        use zeroize::Zeroize;

        /// 实现标准: [FIPS 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf)
        #[derive(Clone)]
        pub struct $NAME {
            digest: [$WORD_TYPE; Self::DIGEST_WSIZE],
            buf: [u8; Self::BLOCK_SIZE],
            // buf下一个可写入位置的索引
            idx: usize,
            // 已写入数据的总字节长度
            len: usize,
            is_finalize: bool,
        }

        impl $NAME {
            pub(in crate::sha2) const BLOCK_SIZE: usize = $BLOCK_BITS / 8;
            pub(in crate::sha2) const WORD_NUMS: usize = $BLOCK_BITS / $WORD_BITS;
            pub(in crate::sha2) const DIGEST_WSIZE: usize = $DIGEST_BITS / $WORD_BITS;
            pub(in crate::sha2) const ROUNDS: usize = $ROUNDS;
            pub(in crate::sha2) const INIT: [$WORD_TYPE; Self::DIGEST_WSIZE] = $INIT_CONST;
            pub(in crate::sha2) const K: [$WORD_TYPE; Self::ROUNDS] = $K_CONST;

            pub const fn new() -> Self {
                Self::new_with_init(Self::INIT)
            }

            pub(in crate::sha2) const fn new_with_init(
                init: [$WORD_TYPE; Self::DIGEST_WSIZE],
            ) -> Self {
                Self {
                    digest: init,
                    buf: [0; Self::BLOCK_SIZE],
                    idx: 0,
                    len: 0,
                    is_finalize: false,
                }
            }
        }

        #[cfg(feature = "sec-zeroize")]
        impl Zeroize for $NAME {
            fn zeroize(&mut self) {
                self.digest.zeroize();
                self.buf.zeroize();
            }
        }

        impl Default for $NAME {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Write for $NAME {
            fn write(&mut self, mut data: &[u8]) -> std::io::Result<usize> {
                if self.is_finalize {
                    self.reset();
                }
                let data_len = data.len();

                if self.idx > 0 {
                    let ava_len = data.len().min(Self::BLOCK_SIZE - self.idx);
                    self.buf[self.idx..(self.idx + ava_len)].copy_from_slice(&data[0..ava_len]);
                    self.idx += ava_len;

                    if self.idx == Self::BLOCK_SIZE {
                        Self::update(&mut self.digest, self.buf.as_ref());
                        self.idx = 0;
                    }

                    data = &data[ava_len..];
                }

                if data.len() >= Self::BLOCK_SIZE {
                    let n = data.len() & (!(Self::BLOCK_SIZE - 1));
                    Self::update(&mut self.digest, &data[0..n]);
                    data = &data[n..];
                }

                if !data.is_empty() {
                    self.buf[0..data.len()].copy_from_slice(data);
                    self.idx += data.len();
                }

                self.len += data_len;
                Ok(data_len)
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl Digest for $NAME {
            const BLOCK_BITS: usize = $BLOCK_BITS;
            const WORD_BITS: usize = $WORD_BITS;
            const DIGEST_BITS: usize = $DIGEST_BITS;

            fn digest(msg: &[u8]) -> Output<Self> {
                let mut sha = Self::new();
                sha.write_all(msg).unwrap();
                sha.finalize()
            }

            fn finalize(&mut self) -> Output<Self> {
                if self.is_finalize {
                    return Output::from_vec(
                        self.digest.iter().flat_map(|x| x.to_be_bytes()).collect(),
                    );
                }

                let mut padding = [0u8; Self::BLOCK_SIZE];
                padding[0] = 0x80;
                let real_len = self.len;
                let len = real_len % Self::BLOCK_SIZE;
                if len < $PAD_BYTES {
                    self.write_all(&padding[0..($PAD_BYTES - len)]).unwrap();
                } else {
                    self.write_all(&padding[0..(Self::BLOCK_SIZE + $PAD_BYTES - len)])
                        .unwrap();
                }

                // 长度域高于64位计数的部分恒为0
                let zeros = [0u8; 8];
                self.write_all(&zeros[0..(Self::BLOCK_SIZE - $PAD_BYTES - 8)])
                    .unwrap();
                // 注意是实际数据的位长度
                self.write_all(((real_len as u64) << 3).to_be_bytes().as_ref())
                    .unwrap();

                self.is_finalize = true;
                Output::from_vec(self.digest.iter().flat_map(|x| x.to_be_bytes()).collect())
            }

            fn reset(&mut self) {
                *self = Self::new();
            }
        }
    };
    (
        $NAME: ident,
        $PARENT: ty,
        $DIGEST_BITS: literal,
        $INIT_CONST: expr
    ) => {
        /// 与父算法共享压缩引擎, 仅初始向量和输出截断长度不同.
        /// 内部状态始终保有8个字, 截断只发生在输出边界.
        #[derive(Clone)]
        pub struct $NAME {
            sha: $PARENT,
        }

        impl $NAME {
            pub const fn new() -> Self {
                Self {
                    sha: <$PARENT>::new_with_init($INIT_CONST),
                }
            }
        }

        #[cfg(feature = "sec-zeroize")]
        impl Zeroize for $NAME {
            fn zeroize(&mut self) {
                self.sha.zeroize();
            }
        }

        impl Default for $NAME {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Write for $NAME {
            fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
                self.sha.write(data)
            }

            fn flush(&mut self) -> std::io::Result<()> {
                self.sha.flush()
            }
        }

        impl Digest for $NAME {
            const BLOCK_BITS: usize = <$PARENT as Digest>::BLOCK_BITS;
            const WORD_BITS: usize = <$PARENT as Digest>::WORD_BITS;
            const DIGEST_BITS: usize = $DIGEST_BITS;

            fn digest(msg: &[u8]) -> Output<Self> {
                let mut sha = Self::new();
                sha.write_all(msg).unwrap();
                sha.finalize()
            }

            fn finalize(&mut self) -> Output<Self> {
                let mut v = self.sha.finalize().to_vec();
                v.truncate($DIGEST_BITS / 8);
                Output::from_vec(v)
            }

            fn reset(&mut self) {
                *self = Self::new();
            }
        }
    };
}

mod generic;

mod sha256;
pub use sha256::{SHA224, SHA256};
mod sha512;
pub use sha512::{SHA384, SHA512};

#[cfg(test)]
mod tests {
    use crate::sha2::{SHA256, SHA512};
    use crate::Digest;
    use rand::{Rng, RngCore};
    use std::io::Write;

    // 分块写入与一次性写入的摘要一致, 覆盖块边界附近的长度
    #[test]
    fn write_split_consistency() {
        let data: Vec<u8> = (0..200u32).map(|x| (x * 131 % 251) as u8).collect();

        for len in [1usize, 55, 56, 57, 63, 64, 65, 111, 112, 113, 119, 127, 128, 129, 200] {
            let msg = &data[0..len];
            let expect256 = format!("{:x}", SHA256::digest(msg));
            let expect512 = format!("{:x}", SHA512::digest(msg));

            for split in [1usize, 7, len / 2, len - 1] {
                let split = split.min(len);

                let mut sha = SHA256::new();
                sha.write_all(&msg[0..split]).unwrap();
                sha.write_all(&msg[split..]).unwrap();
                assert_eq!(
                    format!("{:x}", sha.finalize()),
                    expect256,
                    "case => len {len}, split {split}"
                );

                let mut sha = SHA512::new();
                sha.write_all(&msg[0..split]).unwrap();
                sha.write_all(&msg[split..]).unwrap();
                assert_eq!(
                    format!("{:x}", sha.finalize()),
                    expect512,
                    "case => len {len}, split {split}"
                );
            }

            let mut sha = SHA256::new();
            for b in msg {
                sha.write_all(&[*b]).unwrap();
            }
            assert_eq!(
                format!("{:x}", sha.finalize()),
                expect256,
                "case => len {len}, byte by byte"
            );
        }
    }

    #[test]
    fn determinism_and_reset() {
        let msg = b"For every action there is an equal and opposite government program.";

        let expect = format!("{:x}", SHA256::digest(msg));
        assert_eq!(format!("{:x}", SHA256::digest(msg)), expect);

        let mut sha = SHA256::new();
        sha.write_all(msg).unwrap();
        assert_eq!(format!("{:x}", sha.finalize()), expect);
        // finalize后再次finalize返回相同摘要
        assert_eq!(format!("{:x}", sha.finalize()), expect);
        // finalize后继续写入会重新开始新一轮计算
        sha.write_all(msg).unwrap();
        assert_eq!(format!("{:x}", sha.finalize()), expect);

        sha.reset();
        sha.write_all(msg).unwrap();
        assert_eq!(format!("{:x}", sha.finalize()), expect);
    }

    // 翻转输入的任意一位, 输出约50%的位发生变化
    #[test]
    fn avalanche() {
        let mut rng = rand::thread_rng();
        let mut msg = vec![0u8; 128];
        rng.fill_bytes(&mut msg);

        let base256 = SHA256::digest(&msg);
        let base512 = SHA512::digest(&msg);

        let trials = 128usize;
        let (mut total256, mut total512) = (0u32, 0u32);
        for _ in 0..trials {
            let bit = rng.gen_range(0..msg.len() * 8);
            let mut flipped = msg.clone();
            flipped[bit / 8] ^= 1 << (bit % 8);

            let d = SHA256::digest(&flipped);
            let diff: u32 = base256
                .iter()
                .zip(d.iter())
                .map(|(x, y)| (x ^ y).count_ones())
                .sum();
            assert!((64..=192).contains(&diff), "case => sha256 bit {bit}, diff {diff}");
            total256 += diff;

            let d = SHA512::digest(&flipped);
            let diff: u32 = base512
                .iter()
                .zip(d.iter())
                .map(|(x, y)| (x ^ y).count_ones())
                .sum();
            assert!((128..=384).contains(&diff), "case => sha512 bit {bit}, diff {diff}");
            total512 += diff;
        }

        let mean256 = total256 as f64 / trials as f64;
        assert!((112.0..144.0).contains(&mean256), "mean => {mean256}");
        let mean512 = total512 as f64 / trials as f64;
        assert!((224.0..288.0).contains(&mean512), "mean => {mean512}");
    }
}
