//! 注册表实现的属性测试
