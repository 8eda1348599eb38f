use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    /// 实际字节长度`real`和目标字节长度`target`不匹配
    #[error("real byte length `{real}` not match to target byte length `{target}`")]
    MismatchingByteLen { target: usize, real: usize },

    /// 数据源读取失败, 如文件不存在或不可读
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
