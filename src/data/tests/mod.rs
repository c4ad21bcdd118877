
use std::path::Path;

/// 构造一条记录：标签 + `image_size`字节像素，像素值由`pixel(i)`给出
pub(super) fn record(label: u8, image_size: usize, pixel: impl Fn(usize) -> u8) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(image_size + 1);
    bytes.push(label);
    bytes.extend((0..image_size).map(pixel));
    bytes
}

pub(super) fn write_shard(dir: &Path, name: &str, records: &[Vec<u8>]) {
    std::fs::write(dir.join(name), records.concat()).expect("写入分片失败");
}
