pub mod file_handler;

pub use file_handler::{
    __path_download_file, __path_get_file, __path_get_stats, __path_list_recent_files,
    __path_upload_file, download_file, get_file, get_stats, list_recent_files, upload_file,
};
