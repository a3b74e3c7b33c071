mod upload_file;

// glob: utoipa's generated path item has to be reachable next to the handler
pub use upload_file::*;
