pub mod mahasiswa;
pub mod pagination;
