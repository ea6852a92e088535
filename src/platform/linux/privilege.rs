pub use privilege::user::privileged;

pub fn is_elevated() -> bool {
    privileged()
}
