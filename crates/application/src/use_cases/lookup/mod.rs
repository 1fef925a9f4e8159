pub mod find_name_servers;

pub use find_name_servers::FindNameServersUseCase;
