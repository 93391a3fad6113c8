pub mod core {
    pub mod form;
    pub mod kinematics;
    pub mod layout;
    pub mod logging;
    pub mod plot;
    pub mod scene;
}
