use crate::sha2::{f_ch, f_maj, SHA256};
use utils::Block;

impl SHA256 {
    #[inline]
    const fn rotate_s0(x: u32) -> u32 {
        x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
    }

    #[inline]
    const fn rotate_s1(x: u32) -> u32 {
        x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
    }

    #[inline]
    const fn rotate_d0(x: u32) -> u32 {
        x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
    }

    #[inline]
    const fn rotate_d1(x: u32) -> u32 {
        x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
    }

    /// 压缩`blocks`中的每个块, 更新`digest`状态. `blocks`的长度必须是块长度的整数倍.
    pub(in crate::sha2) fn update(digest: &mut [u32; Self::DIGEST_WSIZE], blocks: &[u8]) {
        for chunk in blocks.chunks_exact(Self::BLOCK_SIZE) {
            // 消息扩展: 前16个单词按大端序取自块数据
            let mut words = [0u32; Self::ROUNDS];
            for (word, bytes) in words.iter_mut().zip(chunk.chunks_exact(4)) {
                *word = u32::from_be_bytes(Block::to_arr_uncheck(bytes));
            }

            for j in Self::WORD_NUMS..Self::ROUNDS {
                words[j] = Self::rotate_d1(words[j - 2])
                    .wrapping_add(words[j - 7])
                    .wrapping_add(Self::rotate_d0(words[j - 15]))
                    .wrapping_add(words[j - 16]);
            }

            let (mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h) = (
                digest[0], digest[1], digest[2], digest[3], digest[4], digest[5], digest[6],
                digest[7],
            );

            for (&word, &k) in words.iter().zip(Self::K.iter()) {
                let t1 = h
                    .wrapping_add(Self::rotate_s1(e))
                    .wrapping_add(f_ch(e, f, g))
                    .wrapping_add(k)
                    .wrapping_add(word);
                let t2 = Self::rotate_s0(a).wrapping_add(f_maj(a, b, c));

                h = g;
                g = f;
                f = e;
                e = d.wrapping_add(t1);
                d = c;
                c = b;
                b = a;
                a = t1.wrapping_add(t2);
            }

            digest[0] = digest[0].wrapping_add(a);
            digest[1] = digest[1].wrapping_add(b);
            digest[2] = digest[2].wrapping_add(c);
            digest[3] = digest[3].wrapping_add(d);
            digest[4] = digest[4].wrapping_add(e);
            digest[5] = digest[5].wrapping_add(f);
            digest[6] = digest[6].wrapping_add(g);
            digest[7] = digest[7].wrapping_add(h);
        }
    }
}
