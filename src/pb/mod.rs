// @generated
pub mod xdc {
    pub mod staking {
        // @@protoc_insertion_point(attribute:xdc.staking.v1)
        pub mod v1 {
            include!("xdc.staking.v1.rs");
            // @@protoc_insertion_point(xdc.staking.v1)
        }
    }
}
