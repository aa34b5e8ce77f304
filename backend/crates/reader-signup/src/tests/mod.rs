mod username_policy;
