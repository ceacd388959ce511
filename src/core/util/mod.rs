pub mod guided_chunk_rows;
pub mod worker_threads;
