mod mat_mul_ops;
