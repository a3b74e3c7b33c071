mod store_upload;

pub use store_upload::{
    StoreUploadCommand, StoreUploadError, StoreUploadUseCase, UploadCommandError,
};
