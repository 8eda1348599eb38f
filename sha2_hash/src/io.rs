//! 以有界内存流式处理文件等`Read`数据源的消息摘要计算.

use crate::{Digest, DigestX, HashError, Output};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use utils::Block;

/// 流式读取的工作块字节大小, 是所有SHA-2变体块长度的整数倍
pub const CHUNK_SIZE: usize = 4096;

/// 分块读取`r`中的全部数据写入哈希算法`sha`, 返回读取的总字节数.
/// 每次读取至多[`CHUNK_SIZE`]字节, 内存占用与数据源总长度无关.
pub fn consume_stream<T, R>(sha: &mut T, r: &mut R) -> Result<usize, HashError>
where
    T: DigestX + ?Sized,
    R: Read + ?Sized,
{
    let mut chunk = Block::zeroed(CHUNK_SIZE);
    let mut total = 0;

    loop {
        let n = match r.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(HashError::Io(e)),
        };

        sha.write_all(&chunk[0..n])?;
        total += n;
    }

    Ok(total)
}

/// 读取`r`中的全部数据, 生成消息摘要.
pub fn digest_stream<D, R>(sha: &mut D, r: &mut R) -> Result<Output<D>, HashError>
where
    D: Digest,
    R: Read + ?Sized,
{
    consume_stream(sha, r)?;

    Ok(sha.finalize())
}

/// 计算文件内容的消息摘要. 文件无法打开或读取时返回[`HashError::Io`],
/// 不会产生部分摘要结果; 文件句柄在计算结束或出错时释放.
pub fn digest_file<D, P>(path: P) -> Result<Output<D>, HashError>
where
    D: Digest + Default,
    P: AsRef<Path>,
{
    let mut f = File::open(path)?;
    let mut sha = D::default();

    digest_stream(&mut sha, &mut f)
}
