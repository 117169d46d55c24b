mod masjid;
mod namaaz;
mod timing;

pub use masjid::{Masjid, MasjidInput};
pub use namaaz::{Namaaz, NamaazInput};
pub use timing::{MasjidNamaazTiming, TimingInput};
