mod identity_store;
